//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Stepscope - SAS DATA step lineage analyzer
#[derive(Parser, Debug)]
#[command(name = "stepscope")]
#[command(about = "Extract dataset lineage from SAS DATA step code", long_about = None)]
#[command(version)]
pub struct Args {
    /// SAS files to scan (reads from stdin if none provided)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Root node name passed to the renderer as a layout hint
    #[arg(short, long, value_name = "NAME")]
    pub root: Option<String>,

    /// Node id to highlight (exact, case-sensitive; json and mermaid output)
    #[arg(long, value_name = "NODE")]
    pub highlight: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress the issues section of table output
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON element list
    Json,
    /// Mermaid diagram
    Mermaid,
}
