//! Tree assembler: flowchart notation to nested mindmap nodes.
//!
//! Uses its own, looser statement grammar: labels may be delimited by square
//! or round brackets and edge statements may end with `;`.
//!
//! DESIGN
//! ======
//! Children are materialized from a source -> targets adjacency after all lines
//! are read, so a label promoted late still shows up everywhere. A target with
//! two parents is copied under both. A back-edge that would make a node its own
//! descendant is dropped, which keeps the output finite for cyclic input.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::ast::MindmapNode;
use super::classify::{split_ident, statements};
use super::registry::Registry;

/// Statement shapes of the tree grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStatement<'a> {
    /// `A[label]` or `A(label)`
    Node { id: &'a str, label: &'a str },
    /// `A --> B`, `A --> B[label];`, `A(label) --> B(label)`
    Edge { source: &'a str, source_label: Option<&'a str>, target: &'a str, target_label: Option<&'a str> },
}

/// Parse flowchart notation into its root mindmap nodes, in registry order.
#[must_use]
pub fn parse_tree(input: &str) -> Vec<MindmapNode> {
    let mut registry = Registry::new();
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();

    for line in statements(input) {
        match classify_tree_line(line) {
            Some(TreeStatement::Node { id, label }) => {
                registry.ensure(id, Some(label));
            }
            Some(TreeStatement::Edge { source, source_label, target, target_label }) => {
                registry.ensure(source, source_label);
                registry.ensure(target, target_label);
                adjacency
                    .entry(source.to_owned())
                    .or_default()
                    .push(target.to_owned());
            }
            None => warn!(line, "mermaid: unrecognized tree line"),
        }
    }

    let targets: HashSet<&str> = adjacency.values().flatten().map(String::as_str).collect();
    let mut path = Vec::new();
    let roots: Vec<MindmapNode> = registry
        .nodes()
        .iter()
        .filter(|node| !targets.contains(node.id.as_str()))
        .map(|node| materialize(&node.id, &registry, &adjacency, &mut path))
        .collect();

    debug!(nodes = registry.nodes().len(), roots = roots.len(), "mermaid: assembled tree");
    roots
}

/// Classify one trimmed line against the tree grammar.
#[must_use]
pub fn classify_tree_line(line: &str) -> Option<TreeStatement<'_>> {
    match_tree_node(line).or_else(|| match_tree_edge(line))
}

fn match_tree_node(line: &str) -> Option<TreeStatement<'_>> {
    let (id, rest) = split_ident(line)?;
    let (label, after) = bracketed(rest.trim_start())?;
    after.is_empty().then_some(TreeStatement::Node { id, label })
}

fn match_tree_edge(line: &str) -> Option<TreeStatement<'_>> {
    let (source, rest) = split_ident(line)?;
    let (source_label, rest) = match bracketed(rest) {
        Some((label, after)) => (Some(label), after),
        None => (None, rest),
    };

    let rest = rest.trim_start().strip_prefix("-->")?.trim_start();
    let (target, rest) = split_ident(rest)?;
    let (target_label, rest) = match bracketed(rest) {
        Some((label, after)) => (Some(label), after),
        None => (None, rest),
    };

    let rest = rest.strip_prefix(';').unwrap_or(rest);
    rest.is_empty().then_some(TreeStatement::Edge { source, source_label, target, target_label })
}

/// Match a leading `[label]` or `(label)`. The label runs to the first closing
/// bracket of either kind and must not be empty.
fn bracketed(s: &str) -> Option<(&str, &str)> {
    let body = s.strip_prefix(['[', '('])?;
    let end = body.find([']', ')'])?;
    if end == 0 {
        return None;
    }
    Some((&body[..end], &body[end + 1..]))
}

fn materialize<'a>(
    id: &'a str,
    registry: &Registry,
    adjacency: &'a HashMap<String, Vec<String>>,
    path: &mut Vec<&'a str>,
) -> MindmapNode {
    let label = registry.get(id).map_or_else(|| id.to_owned(), |node| node.label.clone());

    path.push(id);
    let mut children = Vec::new();
    if let Some(targets) = adjacency.get(id) {
        for target in targets {
            if path.contains(&target.as_str()) {
                continue;
            }
            children.push(materialize(target, registry, adjacency, path));
        }
    }
    path.pop();

    MindmapNode { id: id.to_owned(), label, children }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
