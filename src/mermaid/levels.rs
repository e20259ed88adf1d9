//! Level assignment: hierarchical depth of each node from the roots.
//!
//! DESIGN
//! ======
//! Roots are edge sources that never appear as an edge target, taken in the
//! order their first edge introduced them. A single depth-first walk from each
//! root assigns depths, with one visited set shared by the whole computation.
//! A node reachable along several paths keeps the depth of the first walk that
//! reaches it; this is not a longest-path layering. Nodes no root reaches
//! (isolated nodes, pure cycles) read as depth 0.

use std::collections::{HashMap, HashSet};

use super::ast::EdgeRecord;

/// Node id to depth. Missing ids read as depth 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    depths: HashMap<String, usize>,
}

impl LevelMap {
    #[must_use]
    pub fn depth(&self, id: &str) -> usize {
        self.depths.get(id).copied().unwrap_or(0)
    }

    /// Number of nodes reached from a root.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.depths.len()
    }
}

/// Root ids: distinct edge sources, first-appearance order, minus all targets.
#[must_use]
pub fn roots(edges: &[EdgeRecord]) -> Vec<&str> {
    let targets: HashSet<&str> = edges.iter().map(|e| e.target.as_str()).collect();
    let mut seen = HashSet::new();
    edges
        .iter()
        .map(|e| e.source.as_str())
        .filter(|source| seen.insert(*source) && !targets.contains(source))
        .collect()
}

/// Compute the depth of every node reachable from a root.
#[must_use]
pub fn assign_levels(edges: &[EdgeRecord]) -> LevelMap {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut depths: HashMap<String, usize> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();

    for root in roots(edges) {
        // Children are pushed in reverse so they pop in edge order, which
        // reproduces a recursive pre-order walk.
        let mut stack = vec![(root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            depths.insert(node.to_owned(), depth);
            if let Some(out) = adjacency.get(node) {
                stack.extend(out.iter().rev().map(|&next| (next, depth + 1)));
            }
        }
    }

    LevelMap { depths }
}
