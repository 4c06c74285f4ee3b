//! Human-readable table output formatting.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;
use stepscope_core::{AnalyzeResult, RelationKind, Severity};

/// Format the analysis result as human-readable text with optional colors.
pub fn format_table(result: &AnalyzeResult, quiet: bool, use_colors: bool) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    write_header(&mut out, colored);
    write_summary(&mut out, result, colored);
    write_lineage(&mut out, result, colored);

    if !quiet {
        write_issues(&mut out, result, colored);
    }

    out
}

fn write_header(out: &mut String, colored: bool) {
    let title = "Stepscope Analysis";
    let line = "═".repeat(50);

    if colored {
        writeln!(out, "{}", title.bold()).unwrap();
        writeln!(out, "{}", line.dimmed()).unwrap();
    } else {
        writeln!(out, "{title}").unwrap();
        writeln!(out, "{line}").unwrap();
    }
}

fn write_summary(out: &mut String, result: &AnalyzeResult, colored: bool) {
    let summary = &result.summary;
    let stats = format!(
        "Summary: {} data steps | {} datasets | {} edges",
        summary.step_count, summary.dataset_count, summary.edge_count
    );

    if colored {
        writeln!(out, "{}", stats.cyan()).unwrap();
    } else {
        writeln!(out, "{stats}").unwrap();
    }

    writeln!(out).unwrap();
}

fn write_lineage(out: &mut String, result: &AnalyzeResult, colored: bool) {
    // Group sources by the dataset they feed; merge reads are annotated.
    let mut inputs_by_target: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for edge in &result.edges {
        let shown = match edge.kind {
            RelationKind::Set => edge.source.clone(),
            RelationKind::Merge => format!("{} (merge)", edge.source),
        };
        inputs_by_target
            .entry(edge.target.as_str())
            .or_default()
            .insert(shown);
    }

    if inputs_by_target.is_empty() {
        writeln!(out, "No dataset lineage found.").unwrap();
        writeln!(out).unwrap();
        return;
    }

    if colored {
        writeln!(out, "{}", "Dataset Lineage:".bold()).unwrap();
    } else {
        writeln!(out, "Dataset Lineage:").unwrap();
    }

    for (target, sources) in &inputs_by_target {
        let source_list: Vec<_> = sources.iter().map(|s| s.as_str()).collect();
        let arrow = if colored {
            "→".green().to_string()
        } else {
            "→".to_string()
        };
        writeln!(out, "  {} {} {}", source_list.join(", "), arrow, target).unwrap();
    }
    writeln!(out).unwrap();
}

fn write_issues(out: &mut String, result: &AnalyzeResult, colored: bool) {
    if result.issues.is_empty() {
        return;
    }

    if colored {
        writeln!(out, "{}", "Issues:".bold()).unwrap();
    } else {
        writeln!(out, "Issues:").unwrap();
    }

    for issue in &result.issues {
        let location = issue
            .line
            .map(|l| format!("line {l}: "))
            .unwrap_or_default();
        let text = format!("  [{:?}] {}{} ({})", issue.severity, location, issue.message, issue.code);

        if colored {
            match issue.severity {
                Severity::Error => writeln!(out, "{}", text.red()).unwrap(),
                Severity::Warning => writeln!(out, "{}", text.yellow()).unwrap(),
                Severity::Info => writeln!(out, "{}", text.dimmed()).unwrap(),
            }
        } else {
            writeln!(out, "{text}").unwrap();
        }
    }
}
