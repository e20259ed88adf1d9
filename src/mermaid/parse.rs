//! Graph builder: feeds classified statements into a [`Registry`].

use tracing::{debug, warn};

use super::ast::Statement;
use super::classify::{classify, statements};
use super::registry::Registry;

/// A parsed flowchart: the node/edge registry plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    pub registry: Registry,
    /// Lines that matched no statement shape, in input order.
    pub skipped: Vec<String>,
}

/// Parse flowchart notation into a [`Diagram`].
///
/// Never fails: unrecognized lines are logged and skipped.
#[must_use]
pub fn parse(input: &str) -> Diagram {
    let mut diagram = Diagram::default();

    for line in statements(input) {
        match classify(line) {
            Some(statement) => apply(&mut diagram.registry, &statement),
            None => {
                warn!(line, "mermaid: unrecognized line");
                diagram.skipped.push(line.to_owned());
            }
        }
    }

    debug!(
        nodes = diagram.registry.nodes().len(),
        edges = diagram.registry.edges().len(),
        skipped = diagram.skipped.len(),
        "mermaid: parsed flowchart"
    );
    diagram
}

/// Apply one statement to the registry.
pub fn apply(registry: &mut Registry, statement: &Statement<'_>) {
    match *statement {
        Statement::LabeledEdge { source, target } => {
            registry.ensure(source.id, source.label);
            registry.ensure(target.id, target.label);
            registry.push_edge(source.id, target.id);
        }
        Statement::BareEdge { source, target } => {
            registry.ensure(source, None);
            registry.ensure(target, None);
            registry.push_edge(source, target);
        }
        Statement::NodeDecl { id, label } => {
            registry.ensure(id, Some(label));
        }
        Statement::BareRef { id } => {
            registry.ensure(id, None);
        }
    }
}
