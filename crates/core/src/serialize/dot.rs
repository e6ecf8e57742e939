//! Graphviz rendering, byte-compatible with the existing visualisation pipeline.

use crate::engine::{DependencyTree, NodeId};
use std::fmt::Write;

/// Dependency label printed for a child that never got one.
const UNDEFINED_DEPENDENCY: &str = "undef";

pub fn to_dot(tree: &DependencyTree) -> String {
    let mut out = String::from("digraph relations {\n");
    write_node(tree, tree.root(), &mut out);
    let _ = write!(
        out,
        "\tlabelloc=\"t\"\tlabel=\"{}\";\n}}",
        escape_quotes(tree.text())
    );
    out
}

fn node_id(tree: &DependencyTree, id: NodeId) -> String {
    tree.node(id)
        .map(|node| {
            let head = node.head();
            format!("{}{}", head.word, head.index())
        })
        .unwrap_or_default()
}

fn write_node(tree: &DependencyTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.node(id) else {
        return;
    };
    let name = node_id(tree, id);
    let entity = node
        .entity
        .tag()
        .map(|tag| format!(" [{tag}]"))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "\t\"{}\"[label=\"{}{}\",shape=box];",
        name,
        node.words(),
        entity
    );

    let children = tree.children(id);
    for &child in &children {
        let dependency = tree
            .node(child)
            .and_then(|c| c.dependency.as_deref())
            .unwrap_or(UNDEFINED_DEPENDENCY);
        let _ = writeln!(
            out,
            "\t\"{}\" -> \"{}\"[label=\"{}\"];",
            name,
            node_id(tree, child),
            dependency
        );
    }
    for child in children {
        write_node(tree, child, out);
    }
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}
