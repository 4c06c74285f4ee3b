//! Mermaid diagram generation.

use std::fmt::Write;
use stepscope_core::{ElementList, RelationKind};

/// Format the element list as a Mermaid flowchart.
///
/// `highlight` styles the node whose id exactly equals the term, mirroring
/// the renderer stylesheet transform; a term matching no node adds nothing.
pub fn format_mermaid(elements: &ElementList, highlight: Option<&str>) -> String {
    let mut out = String::from("flowchart TD\n");

    for node in &elements.nodes {
        writeln!(
            out,
            "    {}[\"{}\"]",
            sanitize_id(&node.id),
            escape_label(&node.label)
        )
        .unwrap();
    }

    for edge in &elements.edges {
        let from = sanitize_id(&edge.source);
        let to = sanitize_id(&edge.target);
        match edge.kind {
            RelationKind::Set => writeln!(out, "    {from} --> {to}").unwrap(),
            // Thick arrow mirrors the heavier stroke weight of merge edges.
            RelationKind::Merge => writeln!(out, "    {from} ==>|merge| {to}").unwrap(),
        }
    }

    if let Some(term) = highlight {
        if let Some(node) = elements.nodes.iter().find(|n| n.id == term) {
            writeln!(
                out,
                "    style {} fill:#ff0,color:#000",
                sanitize_id(&node.id)
            )
            .unwrap();
        }
    }

    out
}

/// Sanitize node ID for Mermaid (remove special chars)
fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape label for Mermaid
fn escape_label(label: &str) -> String {
    label.replace('"', "\\\"").replace('\n', " ")
}
