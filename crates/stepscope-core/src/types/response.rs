//! Response types for the SAS lineage analysis API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Issue, IssueCount, Summary};

/// The result of scanning SAS code for dataset lineage.
///
/// Contains the raw extracted edges, the renderer-ready graph element list,
/// any issues encountered during the scan, and summary statistics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResult {
    /// Lineage edges in extraction order (duplicates are not collapsed)
    pub edges: Vec<LineageEdge>,

    /// Renderer-agnostic graph element list built from the edges
    pub graph: ElementList,

    /// All issues encountered during the scan
    pub issues: Vec<Issue>,

    /// Summary statistics
    pub summary: Summary,
}

impl AnalyzeResult {
    /// Create an error result with a single issue.
    /// Useful for returning errors from the WASM boundary or other entry points.
    pub fn from_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            edges: Vec::new(),
            graph: ElementList::default(),
            issues: vec![Issue::error(code, message)],
            summary: Summary {
                step_count: 0,
                dataset_count: 0,
                edge_count: 0,
                issue_count: IssueCount {
                    errors: 1,
                    warnings: 0,
                    infos: 0,
                },
                has_errors: true,
            },
        }
    }
}

/// How an input dataset was read into the step producing the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Sequential/stacking read (`SET` statement)
    Set,
    /// Join-like combination of multiple inputs (`MERGE` statement)
    Merge,
}

/// A directed lineage relationship: `source` was read to help produce `target`.
///
/// Dataset names are lowercased on ingestion; the name is the node identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineageEdge {
    /// Dataset that was read
    pub source: String,

    /// Dataset being produced
    pub target: String,

    /// Statement kind the read came from
    pub kind: RelationKind,
}

impl LineageEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// A node record in the render element list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeElement {
    /// Unique node id (the dataset name)
    pub id: String,

    /// Display label (same as the id)
    pub label: String,
}

/// An edge record in the render element list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdgeElement {
    /// Source node id
    pub source: String,

    /// Target node id
    pub target: String,

    /// Relation kind the edge was extracted from
    pub kind: RelationKind,

    /// Style hint derived deterministically from `kind`
    pub style: EdgeStyle,
}

/// Visual style hint for an edge, derived from its [`RelationKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// Line color understood by the renderer
    pub line_color: String,

    /// Stroke weight in renderer units
    pub width: u32,
}

/// A renderer-agnostic element list: deduplicated nodes plus styled edges.
///
/// Record order is not a correctness property; consumers must treat the node
/// and edge collections set-wise.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElementList {
    /// One record per distinct dataset name
    pub nodes: Vec<NodeElement>,

    /// One record per extracted lineage edge
    pub edges: Vec<EdgeElement>,

    /// Layout hint naming the preferred root node; not validated against the
    /// node set (a hint naming an absent node is inert)
    pub root_hint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_sets_summary() {
        let result = AnalyzeResult::from_error("INVALID_REQUEST", "bad payload");
        assert!(result.summary.has_errors);
        assert_eq!(result.summary.issue_count.errors, 1);
        assert!(result.edges.is_empty());
        assert!(result.graph.nodes.is_empty());
    }

    #[test]
    fn test_relation_kind_serializes_lowercase() {
        let edge = LineageEdge::new("a", "out", RelationKind::Merge);
        let json = serde_json::to_string(&edge).unwrap();
        assert!(json.contains("\"kind\":\"merge\""));
    }

    #[test]
    fn test_result_round_trip() {
        let result = AnalyzeResult {
            edges: vec![LineageEdge::new("a", "out", RelationKind::Set)],
            graph: ElementList::default(),
            issues: Vec::new(),
            summary: Summary::default(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalyzeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.edges, result.edges);
    }
}
