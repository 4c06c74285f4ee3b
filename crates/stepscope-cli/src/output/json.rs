//! JSON output formatting.

use serde::Serialize;
use stepscope_core::{highlight_stylesheet, AnalyzeResult, StyleRule};

/// JSON envelope for CLI output: the analysis result plus the stylesheet the
/// rendering widget applies when a highlight was requested.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a AnalyzeResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    stylesheet: Option<Vec<StyleRule>>,
}

/// Format the analysis result as JSON.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json(result: &AnalyzeResult, highlight: Option<&str>, compact: bool) -> String {
    let report = JsonReport {
        result,
        stylesheet: highlight.map(|term| highlight_stylesheet(Some(term))),
    };

    if compact {
        serde_json::to_string(&report).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(&report).expect("serialization cannot fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepscope_core::{analyze, AnalyzeRequest};

    fn result() -> AnalyzeResult {
        analyze(&AnalyzeRequest::from_code("data out;\nset a;"))
    }

    #[test]
    fn test_json_pretty() {
        let json = format_json(&result(), None, false);
        assert!(json.contains('\n'));
        assert!(json.contains("summary"));
        assert!(!json.contains("stylesheet"));
    }

    #[test]
    fn test_json_compact() {
        let json = format_json(&result(), None, true);
        assert!(!json.starts_with("{\n"));
    }

    #[test]
    fn test_json_with_highlight_includes_stylesheet() {
        let json = format_json(&result(), Some("out"), true);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rules = parsed["stylesheet"].as_array().unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[2]["id"], "out");
    }
}
