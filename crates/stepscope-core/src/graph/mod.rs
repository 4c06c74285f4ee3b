//! Graph construction: lineage edges to a renderer-agnostic element list.

use crate::style::edge_style;
use crate::types::{EdgeElement, ElementList, LineageEdge, NodeElement};
use std::collections::HashSet;

/// Default layout root when the caller supplies no hint.
pub const DEFAULT_ROOT_HINT: &str = "raw_data";

/// Build the element list for a set of lineage edges.
///
/// The node set is the union of all edge endpoints, one record per distinct
/// name with `id = label = name`. Every input edge becomes exactly one edge
/// record; duplicates are preserved, so re-running on the same input is
/// idempotent set-wise while accidental duplication within one extraction
/// stays visible.
///
/// `root_hint` is recorded verbatim as a layout hint; it never affects
/// membership and is not checked against the node set.
pub fn build(edges: &[LineageEdge], root_hint: Option<&str>) -> ElementList {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut nodes: Vec<NodeElement> = Vec::new();

    for edge in edges {
        for name in [edge.source.as_str(), edge.target.as_str()] {
            if seen.insert(name) {
                nodes.push(NodeElement {
                    id: name.to_string(),
                    label: name.to_string(),
                });
            }
        }
    }

    let edges = edges
        .iter()
        .map(|edge| EdgeElement {
            source: edge.source.clone(),
            target: edge.target.clone(),
            kind: edge.kind,
            style: edge_style(edge.kind),
        })
        .collect();

    ElementList {
        nodes,
        edges,
        root_hint: root_hint.unwrap_or(DEFAULT_ROOT_HINT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelationKind;
    use std::collections::HashSet;

    fn edge(source: &str, target: &str, kind: RelationKind) -> LineageEdge {
        LineageEdge::new(source, target, kind)
    }

    #[test]
    fn test_nodes_deduplicated_across_edges() {
        let edges = vec![
            edge("a", "out", RelationKind::Set),
            edge("b", "out", RelationKind::Set),
        ];
        let elements = build(&edges, None);

        let ids: HashSet<_> = elements.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, HashSet::from(["a", "b", "out"]));
        assert!(elements.nodes.iter().all(|n| n.id == n.label));
    }

    #[test]
    fn test_one_edge_record_per_input_edge() {
        let edges = vec![
            edge("a", "out", RelationKind::Set),
            edge("a", "out", RelationKind::Set),
        ];
        let elements = build(&edges, None);
        assert_eq!(elements.edges.len(), 2);
        assert_eq!(elements.nodes.len(), 2);
    }

    #[test]
    fn test_merge_edges_get_distinguished_style() {
        let edges = vec![
            edge("a", "out", RelationKind::Set),
            edge("b", "out", RelationKind::Merge),
        ];
        let elements = build(&edges, None);

        let set_edge = &elements.edges[0];
        let merge_edge = &elements.edges[1];
        assert_ne!(set_edge.style.line_color, merge_edge.style.line_color);
        assert!(merge_edge.style.width > set_edge.style.width);
    }

    #[test]
    fn test_root_hint_defaults_and_passes_through() {
        assert_eq!(build(&[], None).root_hint, DEFAULT_ROOT_HINT);
        // The hint is not validated: a name absent from the graph is kept inert.
        let elements = build(&[edge("a", "b", RelationKind::Set)], Some("nowhere"));
        assert_eq!(elements.root_hint, "nowhere");
        assert_eq!(elements.nodes.len(), 2);
    }

    #[test]
    fn test_empty_edges_build_empty_elements() {
        let elements = build(&[], None);
        assert!(elements.nodes.is_empty());
        assert!(elements.edges.is_empty());
    }

    #[test]
    fn test_set_wise_determinism_under_reordering() {
        let forward = vec![
            edge("a", "x", RelationKind::Set),
            edge("b", "y", RelationKind::Merge),
        ];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        let lhs = build(&forward, None);
        let rhs = build(&reversed, None);

        let lhs_nodes: HashSet<_> = lhs.nodes.into_iter().collect();
        let rhs_nodes: HashSet<_> = rhs.nodes.into_iter().collect();
        assert_eq!(lhs_nodes, rhs_nodes);

        let lhs_edges: HashSet<_> = lhs.edges.into_iter().map(|e| (e.source, e.target)).collect();
        let rhs_edges: HashSet<_> = rhs.edges.into_iter().map(|e| (e.source, e.target)).collect();
        assert_eq!(lhs_edges, rhs_edges);
    }
}
