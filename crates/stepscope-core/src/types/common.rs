//! Common types shared between request and response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An issue encountered while scanning SAS code (error, warning, or info).
///
/// Issues are advisory. The extractor has no failure mode: a malformed line
/// produces fewer or no edges plus an issue, never a hard error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Severity level
    pub severity: Severity,

    /// Machine-readable issue code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Optional: 1-indexed source line the issue relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Issue {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Summary statistics for the analysis result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of DATA statements recognized in the input
    pub step_count: usize,

    /// Distinct dataset names appearing as an edge endpoint
    pub dataset_count: usize,

    /// Total lineage edges extracted (duplicates are not collapsed)
    pub edge_count: usize,

    /// Issue counts by severity
    pub issue_count: IssueCount,

    /// Quick check: true if any errors were encountered
    pub has_errors: bool,
}

/// Counts of issues by severity level.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct IssueCount {
    /// Number of error-level issues
    pub errors: usize,
    /// Number of warning-level issues
    pub warnings: usize,
    /// Number of info-level issues
    pub infos: usize,
}

/// Machine-readable issue codes.
pub mod issue_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const NO_OUTPUT_CONTEXT: &str = "NO_OUTPUT_CONTEXT";
    pub const EMPTY_DATA_TARGETS: &str = "EMPTY_DATA_TARGETS";
    pub const UNTERMINATED_STATEMENT: &str = "UNTERMINATED_STATEMENT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_creation() {
        let issue = Issue::warning(issue_codes::EMPTY_DATA_TARGETS, "no targets").with_line(3);

        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.code, "EMPTY_DATA_TARGETS");
        assert_eq!(issue.line, Some(3));
    }

    #[test]
    fn test_issue_serialization_skips_absent_line() {
        let issue = Issue::info(issue_codes::NO_OUTPUT_CONTEXT, "skipped");
        let json = serde_json::to_string(&issue).unwrap();
        assert!(!json.contains("line"));
        assert!(json.contains("\"severity\":\"info\""));
    }
}
