//! Graphviz rendering of the decision tree

use std::fmt::Write;

use evplan_core::analysis::{DecisionTree, NodeKind};

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

fn node_style(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Root => "shape=circle, style=filled, fillcolor=lightgray",
        NodeKind::Decision { keep: true } => "shape=box, style=filled, fillcolor=palegreen",
        NodeKind::Decision { keep: false } => "shape=box, style=filled, fillcolor=mistyrose",
        NodeKind::Chance => "shape=ellipse",
    }
}

/// Render `tree` as a left-to-right Graphviz digraph
pub fn decision_tree_dot(tree: &DecisionTree, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph decision_tree {{");
    let _ = writeln!(out, "  label={};", quote(title));
    let _ = writeln!(out, "  labelloc=t;");
    let _ = writeln!(out, "  rankdir=LR;");
    let _ = writeln!(out, "  node [fontsize=10];");

    for node in &tree.nodes {
        let _ = writeln!(
            out,
            "  n{} [label={}, {}];",
            node.id,
            quote(&node.label),
            node_style(node.kind)
        );
    }
    for edge in &tree.edges {
        let _ = writeln!(
            out,
            "  n{} -> n{} [label={}];",
            edge.from,
            edge.to,
            quote(&edge.label)
        );
    }

    out.push_str("}\n");
    out
}
