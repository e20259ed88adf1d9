//! Layout engine: places parsed nodes in depth rows and centers the drawing.

use std::collections::BTreeMap;

use tracing::debug;

use super::ast::{FlowGraph, FlowNode, NodeRecord, Position};
use super::levels::{LevelMap, assign_levels};
use super::parse::Diagram;

// Layout constants (canvas units).
pub const X_GAP: f64 = 280.0;
pub const Y_GAP: f64 = 160.0;
/// Center of an 800x600 viewport.
pub const ANCHOR: Position = Position { x: 400.0, y: 300.0 };

/// Convert a parsed diagram into positioned nodes and its edges.
#[must_use]
pub fn render_flow(diagram: &Diagram) -> FlowGraph {
    let registry = &diagram.registry;
    let levels = assign_levels(registry.edges());
    let positions = layout(registry.nodes(), &levels);
    debug!(nodes = registry.nodes().len(), reached = levels.reached(), "mermaid: laid out flowchart");

    let nodes = registry
        .nodes()
        .iter()
        .zip(positions)
        .map(|(node, pos)| FlowNode { id: node.id.clone(), label: node.label.clone(), x: pos.x, y: pos.y })
        .collect();

    FlowGraph { nodes, edges: registry.edges().to_vec() }
}

/// Final positions for `nodes`, index-aligned with the input.
#[must_use]
pub fn layout(nodes: &[NodeRecord], levels: &LevelMap) -> Vec<Position> {
    let mut positions = place_rows(nodes, levels);
    center_on(&mut positions, ANCHOR);
    positions
}

/// Row placement before centering.
///
/// Rows are visited in ascending depth. Inside a row, nodes keep discovery
/// order and are spread `X_GAP` apart, symmetric around `x = 0`.
#[must_use]
pub fn place_rows(nodes: &[NodeRecord], levels: &LevelMap) -> Vec<Position> {
    let mut rows: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, node) in nodes.iter().enumerate() {
        rows.entry(levels.depth(&node.id)).or_default().push(idx);
    }

    let mut positions = vec![Position::default(); nodes.len()];
    for (level, members) in &rows {
        #[allow(clippy::cast_precision_loss)]
        let start_x = -((members.len() - 1) as f64 * X_GAP) / 2.0;
        #[allow(clippy::cast_precision_loss)]
        let y = *level as f64 * Y_GAP;
        for (col, &idx) in members.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = start_x + col as f64 * X_GAP;
            positions[idx] = Position { x, y };
        }
    }
    positions
}

/// Shift every position so the bounding box center lands on `anchor`.
pub fn center_on(positions: &mut [Position], anchor: Position) {
    let Some(first) = positions.first().copied() else {
        return;
    };
    let (min, max) = positions.iter().fold((first, first), |(min, max), p| {
        (Position { x: min.x.min(p.x), y: min.y.min(p.y) }, Position { x: max.x.max(p.x), y: max.y.max(p.y) })
    });

    let offset_x = anchor.x - f64::midpoint(min.x, max.x);
    let offset_y = anchor.y - f64::midpoint(min.y, max.y);
    for pos in positions {
        pos.x += offset_x;
        pos.y += offset_y;
    }
}
