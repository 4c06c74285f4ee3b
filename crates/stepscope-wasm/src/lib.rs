use stepscope_core::{analyze, highlight_stylesheet, issue_codes, AnalyzeRequest, AnalyzeResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Main analysis entry point - accepts JSON request, returns JSON result
/// This function never throws - errors are returned in the result's issues array
#[wasm_bindgen]
pub fn analyze_sas_json(request_json: &str) -> String {
    // Parse the request
    let request: AnalyzeRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(_) => {
            let result =
                AnalyzeResult::from_error(issue_codes::INVALID_REQUEST, "Invalid request format");
            return serde_json::to_string(&result)
                .unwrap_or_else(|_| r#"{"error":"Failed to serialize error result"}"#.to_string());
        }
    };

    // Perform analysis
    let result = analyze(&request);

    // Serialize result
    serde_json::to_string(&result).unwrap_or_else(|_| {
        let error_result = AnalyzeResult::from_error(
            issue_codes::INVALID_REQUEST,
            "Failed to serialize result".to_string(),
        );
        serde_json::to_string(&error_result)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize error result"}"#.to_string())
    })
}

/// Stylesheet for the rendering widget, optionally highlighting one node id.
/// Matching is exact and case-sensitive; an unknown id selects nothing.
#[wasm_bindgen]
pub fn highlight_stylesheet_json(search: Option<String>) -> String {
    let rules = highlight_stylesheet(search.as_deref());
    serde_json::to_string(&rules).unwrap_or_else(|_| "[]".to_string())
}

/// Get version information
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_sas_json_simple() {
        let request = r#"{"code": "data out;\nset a b;"}"#;
        let result = analyze_sas_json(request);

        // Should be valid JSON
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        // Should have the edges and graph element list
        assert_eq!(parsed["edges"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["graph"]["nodes"].as_array().unwrap().len(), 3);

        // Should not have errors
        assert!(!parsed["summary"]["hasErrors"].as_bool().unwrap());
    }

    #[test]
    fn test_analyze_sas_json_with_root_hint() {
        let request = r#"{"code": "data out;\nset a;", "options": {"rootHint": "a"}}"#;
        let result = analyze_sas_json(request);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["graph"]["rootHint"], "a");
    }

    #[test]
    fn test_analyze_sas_json_lineage_free_input() {
        let request = r#"{"code": "proc print data=a;\nrun;"}"#;
        let result = analyze_sas_json(request);

        // Nothing to extract renders an empty graph, never an error.
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["graph"]["nodes"].as_array().unwrap().is_empty());
        assert!(!parsed["summary"]["hasErrors"].as_bool().unwrap());
    }

    #[test]
    fn test_analyze_sas_json_invalid_request() {
        let request = r#"{"not_valid": true}"#;
        let result = analyze_sas_json(request);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["summary"]["hasErrors"].as_bool().unwrap());
        assert_eq!(parsed["issues"][0]["code"], "INVALID_REQUEST");
    }

    #[test]
    fn test_highlight_stylesheet_json() {
        let defaults: serde_json::Value =
            serde_json::from_str(&highlight_stylesheet_json(None)).unwrap();
        assert_eq!(defaults.as_array().unwrap().len(), 2);

        let highlighted: serde_json::Value =
            serde_json::from_str(&highlight_stylesheet_json(Some("x".to_string()))).unwrap();
        assert_eq!(highlighted.as_array().unwrap().len(), 3);
        assert_eq!(highlighted[2]["id"], "x");
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
