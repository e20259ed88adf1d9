//! Flowchart parser and layout engine.
//!
//! Parses the `graph TD` subset of Mermaid flowchart syntax (node
//! declarations, bare references and `-->` edges) and produces either a flat,
//! positioned node/edge graph for the canvas or a nested mindmap tree.

pub mod ast;
pub mod classify;
pub mod layout;
pub mod levels;
pub mod parse;
pub mod registry;
pub mod tree;

pub use ast::{FlowGraph, MindmapNode};
pub use layout::render_flow;
pub use parse::parse;
pub use tree::parse_tree;

/// Parse flowchart text and lay it out in one step.
#[must_use]
pub fn flowchart(input: &str) -> FlowGraph {
    render_flow(&parse(input))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
