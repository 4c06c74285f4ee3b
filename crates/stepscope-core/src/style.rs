//! Renderer style rules and the node-highlight transform.
//!
//! Rules are a small closed set of typed variants rather than string-keyed
//! style maps, so every hint the core can emit is enumerable and testable.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{EdgeStyle, RelationKind};

/// Base node fill.
pub const NODE_COLOR: &str = "red";
/// Base node label color.
pub const NODE_TEXT_COLOR: &str = "white";
/// Fill for the highlighted node.
pub const HIGHLIGHT_COLOR: &str = "yellow";
/// Label color for the highlighted node.
pub const HIGHLIGHT_TEXT_COLOR: &str = "black";
/// Line color for plain `SET` edges.
pub const SET_EDGE_COLOR: &str = "black";
/// Line color distinguishing `MERGE` edges.
pub const MERGE_EDGE_COLOR: &str = "firebrick";

const SET_EDGE_WIDTH: u32 = 1;
const MERGE_EDGE_WIDTH: u32 = 3;

/// A single stylesheet rule for the rendering widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "selector", rename_all = "camelCase")]
pub enum StyleRule {
    /// Base rule applied to every node.
    #[serde(rename_all = "camelCase")]
    AllNodes {
        background_color: String,
        text_color: String,
    },
    /// Base rule applied to every edge.
    #[serde(rename_all = "camelCase")]
    AllEdges { line_color: String },
    /// Override for the node whose id exactly equals `id`.
    #[serde(rename_all = "camelCase")]
    NodeById {
        id: String,
        background_color: String,
        text_color: String,
    },
}

/// Deterministic style hint for an edge of the given kind.
pub fn edge_style(kind: RelationKind) -> EdgeStyle {
    match kind {
        RelationKind::Set => EdgeStyle {
            line_color: SET_EDGE_COLOR.to_string(),
            width: SET_EDGE_WIDTH,
        },
        RelationKind::Merge => EdgeStyle {
            line_color: MERGE_EDGE_COLOR.to_string(),
            width: MERGE_EDGE_WIDTH,
        },
    }
}

/// Build the stylesheet for the renderer, optionally highlighting one node.
///
/// With no search term (or an empty one), returns the two default rules.
/// With a non-empty term, appends one exact-id rule for it. The match is
/// case-sensitive and unnormalized; a term matching zero nodes is fine, the
/// extra rule simply selects nothing in the renderer.
pub fn highlight_stylesheet(search: Option<&str>) -> Vec<StyleRule> {
    let mut rules = vec![
        StyleRule::AllNodes {
            background_color: NODE_COLOR.to_string(),
            text_color: NODE_TEXT_COLOR.to_string(),
        },
        StyleRule::AllEdges {
            line_color: SET_EDGE_COLOR.to_string(),
        },
    ];

    if let Some(term) = search {
        if !term.is_empty() {
            rules.push(StyleRule::NodeById {
                id: term.to_string(),
                background_color: HIGHLIGHT_COLOR.to_string(),
                text_color: HIGHLIGHT_TEXT_COLOR.to_string(),
            });
        }
    }

    rules
}
