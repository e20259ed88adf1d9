//! Types for the flowchart notation and the graphs built from it.

use serde::Serialize;

// =============================================================================
// STATEMENTS
// =============================================================================

/// One classified source line. Borrows its ids and labels from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `A[Start] --> B[End]`, with a label on at least one endpoint.
    LabeledEdge { source: Endpoint<'a>, target: Endpoint<'a> },
    /// `A --> B`
    BareEdge { source: &'a str, target: &'a str },
    /// `A[Start]`
    NodeDecl { id: &'a str, label: &'a str },
    /// `A`
    BareRef { id: &'a str },
}

/// Edge endpoint with its optional inline label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub id: &'a str,
    pub label: Option<&'a str>,
}

// =============================================================================
// GRAPH RECORDS
// =============================================================================

/// A node as first discovered, with its (possibly promoted) label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
}

/// A directed edge. The id is derived as `source-target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl EdgeRecord {
    #[must_use]
    pub fn new(source: &str, target: &str) -> Self {
        Self { id: format!("{source}-{target}"), source: source.to_owned(), target: target.to_owned() }
    }
}

// =============================================================================
// LAYOUT OUTPUT
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A positioned node, ready for the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Flat node/edge result of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<EdgeRecord>,
}

/// A node of the nested tree variant. Owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MindmapNode {
    pub id: String,
    pub label: String,
    pub children: Vec<MindmapNode>,
}
