//! Request types for the SAS lineage analysis API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A request to extract dataset lineage from SAS code.
///
/// This is the main entry point for the analysis API. It accepts a text blob
/// of SAS DATA step code and produces a lineage graph element list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// The SAS code to scan (UTF-8 string, line-oriented)
    pub code: String,

    /// Optional source name (file path or script identifier) for reporting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// Optional analysis options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<AnalysisOptions>,
}

impl AnalyzeRequest {
    /// Build a request from a bare code blob with default options.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            source_name: None,
            options: None,
        }
    }
}

/// Options controlling graph construction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOptions {
    /// Preferred root node name for downstream hierarchical layout.
    ///
    /// Purely a layout hint: it does not affect node or edge membership and
    /// is not validated against the node set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_hint: Option<String>,
}

/// A named source file, used by collaborators that read from disk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileSource {
    pub name: String,
    pub content: String,
}
