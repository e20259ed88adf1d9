//! Per-parse node registry and edge list.
//!
//! DESIGN
//! ======
//! A `Registry` lives for exactly one parse call and is passed through the
//! stages explicitly. Nodes keep first-seen order; edges keep statement order
//! and are never deduplicated.

use std::collections::HashMap;

use super::ast::{EdgeRecord, NodeRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    nodes: Vec<NodeRecord>,
    index: HashMap<String, usize>,
    edges: Vec<EdgeRecord>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or create a node.
    ///
    /// A new node takes `label`, or its id when no label is given. An existing
    /// node whose label still equals its id is promoted to a differing `label`;
    /// any other existing label is kept.
    pub fn ensure(&mut self, id: &str, label: Option<&str>) -> &NodeRecord {
        let label = label.unwrap_or(id);
        let idx = if let Some(&idx) = self.index.get(id) {
            let node = &mut self.nodes[idx];
            if label != id && node.label == id {
                label.clone_into(&mut node.label);
            }
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(NodeRecord { id: id.to_owned(), label: label.to_owned() });
            self.index.insert(id.to_owned(), idx);
            idx
        };
        &self.nodes[idx]
    }

    /// Append an edge. Both endpoints must already be ensured.
    pub fn push_edge(&mut self, source: &str, target: &str) {
        self.edges.push(EdgeRecord::new(source, target));
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NodeRecord> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Nodes in first-discovery order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Edges in statement order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }
}
