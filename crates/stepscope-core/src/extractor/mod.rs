//! Line-oriented lineage extraction from SAS DATA step code.
//!
//! This is deliberately not a SAS parser. The scan is a single forward pass
//! over physical lines recognizing `DATA`, `SET`, and `MERGE` statement heads
//! only; everything else (PROC steps, comments, macro directives,
//! continuation lines) is ignored. A statement wrapped across physical lines
//! is recognized on its first line only, a documented constraint surfaced
//! as an [`issue_codes::UNTERMINATED_STATEMENT`] issue rather than silently.

use crate::types::{issue_codes, Issue, LineageEdge, RelationKind};

/// Everything a single scan produced: edges, advisory issues, and the count
/// of DATA statements seen.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub edges: Vec<LineageEdge>,
    pub issues: Vec<Issue>,
    pub step_count: usize,
}

/// Scan SAS code and emit one lineage edge per (input, output target) pair.
///
/// The output context (the dataset names the current DATA step is producing)
/// is a local threaded through the scan. It is created empty, overwritten
/// by every `DATA` line, read (not cleared) by every `SET`/`MERGE` line, and
/// discarded when the scan ends, so concurrent calls share nothing.
pub fn extract(source: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut outputs: Vec<String> = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim().to_lowercase();
        let line_no = index + 1;

        if let Some(rest) = line.strip_prefix("data ") {
            extraction.step_count += 1;
            outputs = parse_data_targets(rest);

            if outputs.is_empty() {
                extraction.issues.push(
                    Issue::warning(
                        issue_codes::EMPTY_DATA_TARGETS,
                        "DATA statement names no output dataset; following SET/MERGE lines are ignored",
                    )
                    .with_line(line_no),
                );
            }
            note_unterminated(&line, line_no, &mut extraction.issues);
        } else if line.starts_with("set ") || line.starts_with("merge ") {
            let kind = if line.starts_with("merge ") {
                RelationKind::Merge
            } else {
                RelationKind::Set
            };

            let inputs = parse_input_names(&line);

            if outputs.is_empty() {
                if !inputs.is_empty() {
                    extraction.issues.push(
                        Issue::info(
                            issue_codes::NO_OUTPUT_CONTEXT,
                            "SET/MERGE with no preceding DATA statement; line skipped",
                        )
                        .with_line(line_no),
                    );
                }
            } else {
                for input in &inputs {
                    for target in &outputs {
                        extraction
                            .edges
                            .push(LineageEdge::new(input.as_str(), target.as_str(), kind));
                    }
                }
            }
            note_unterminated(&line, line_no, &mut extraction.issues);
        }
        // Any other line is ignored.
    }

    extraction
}

/// Parse the output targets of a `DATA` statement: everything between the
/// `data` keyword and the first `;`, split on whitespace. SAS allows several
/// simultaneous outputs on one statement.
fn parse_data_targets(rest: &str) -> Vec<String> {
    let head = rest.split(';').next().unwrap_or("");
    head.split_whitespace().map(str::to_owned).collect()
}

/// Parse the input dataset names of a `SET`/`MERGE` line: every whitespace
/// token after the statement keyword, with trailing `;` stripped.
///
/// Parenthesized dataset options (`KEEP=`, `WHERE=`, ...) are NOT stripped
/// and become part of the node identity.
fn parse_input_names(line: &str) -> Vec<String> {
    line.split_whitespace()
        .skip(1)
        .map(|token| token.trim_end_matches(';'))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn note_unterminated(line: &str, line_no: usize, issues: &mut Vec<Issue>) {
    if !line.contains(';') {
        issues.push(
            Issue::info(
                issue_codes::UNTERMINATED_STATEMENT,
                "statement has no `;` on this line; names on following lines are not tracked",
            )
            .with_line(line_no),
        );
    }
}
