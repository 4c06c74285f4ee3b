//! Analysis façade composing extraction and graph construction.

use crate::extractor::{extract, Extraction};
use crate::graph::build;
use crate::types::{AnalyzeRequest, AnalyzeResult, ElementList, IssueCount, Severity, Summary};
#[cfg(feature = "tracing")]
use tracing::info_span;

/// Main entry point for SAS lineage analysis.
///
/// Stateless per call: each invocation scans the request's code from scratch
/// and rebuilds the graph; nothing is shared across calls. An unparseable or
/// lineage-free submission produces an empty graph, never an error.
pub fn analyze(request: &AnalyzeRequest) -> AnalyzeResult {
    #[cfg(feature = "tracing")]
    let _span = info_span!(
        "analyze_request",
        lines = request.code.lines().count(),
        source = request.source_name.as_deref().unwrap_or("inline")
    )
    .entered();

    let extraction = extract(&request.code);

    let root_hint = request
        .options
        .as_ref()
        .and_then(|o| o.root_hint.as_deref());
    let graph = build(&extraction.edges, root_hint);

    let summary = build_summary(&extraction, &graph);

    AnalyzeResult {
        edges: extraction.edges,
        issues: extraction.issues,
        graph,
        summary,
    }
}

fn build_summary(extraction: &Extraction, graph: &ElementList) -> Summary {
    let errors = count_severity(extraction, Severity::Error);
    let warnings = count_severity(extraction, Severity::Warning);
    let infos = count_severity(extraction, Severity::Info);

    Summary {
        step_count: extraction.step_count,
        dataset_count: graph.nodes.len(),
        edge_count: extraction.edges.len(),
        issue_count: IssueCount {
            errors,
            warnings,
            infos,
        },
        has_errors: errors > 0,
    }
}

fn count_severity(extraction: &Extraction, severity: Severity) -> usize {
    extraction
        .issues
        .iter()
        .filter(|i| i.severity == severity)
        .count()
}
