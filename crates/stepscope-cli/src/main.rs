//! Stepscope CLI - SAS DATA step lineage analyzer

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use stepscope_cli::cli::{Args, OutputFormat};
use stepscope_cli::input;
use stepscope_cli::output::{format_json, format_mermaid, format_table};
use stepscope_core::{analyze, AnalysisOptions, AnalyzeRequest};

/// Analysis produced error-level issues.
const EXIT_FAILURE: u8 = 1;
/// Configuration error (bad arguments or unreadable input).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("stepscope: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let sources = input::read_sources(&args.files)?;
    let code = input::combine_sources(&sources);
    let source_name = sources.first().map(|s| s.name.clone());

    let request = AnalyzeRequest {
        code,
        source_name,
        options: args.root.clone().map(|root_hint| AnalysisOptions {
            root_hint: Some(root_hint),
        }),
    };
    let result = analyze(&request);

    let rendered = match args.format {
        OutputFormat::Table => format_table(&result, args.quiet, true),
        OutputFormat::Json => format_json(&result, args.highlight.as_deref(), args.compact),
        OutputFormat::Mermaid => format_mermaid(&result.graph, args.highlight.as_deref()),
    };

    match &args.output {
        Some(path) => fs::write(path, rendered.as_bytes())
            .with_context(|| format!("failed to write output file: {}", path.display()))?,
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
            if !rendered.ends_with('\n') {
                writeln!(stdout).context("failed to write to stdout")?;
            }
        }
    }

    Ok(result.summary.has_errors)
}
