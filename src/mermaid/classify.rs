//! Line classifier for flowchart notation.
//!
//! Each line is tried against an ordered list of shape matchers and the first
//! match wins. Matching is done by hand over `&str` slices; identifiers are
//! runs of ASCII word characters.

use super::ast::{Endpoint, Statement};

/// Lines starting with this keyword are diagram directives, not statements.
pub const GRAPH_KEYWORD: &str = "graph";

type Matcher = for<'a> fn(&'a str) -> Option<Statement<'a>>;

/// Matchers in priority order.
const MATCHERS: &[Matcher] = &[match_labeled_edge, match_bare_edge, match_node_decl, match_bare_ref];

/// Split diagram text into trimmed statement lines.
///
/// Empty lines and `graph ...` directives are dropped. The iterator is lazy and
/// can be cloned to restart from the beginning.
pub fn statements(input: &str) -> impl Iterator<Item = &str> + Clone {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(GRAPH_KEYWORD))
}

/// Classify one trimmed line. `None` means the line has no known shape.
#[must_use]
pub fn classify(line: &str) -> Option<Statement<'_>> {
    MATCHERS.iter().find_map(|matcher| matcher(line))
}

// =============================================================================
// SHAPE MATCHERS
// =============================================================================

fn match_labeled_edge(line: &str) -> Option<Statement<'_>> {
    let (source, rest) = split_ident(line)?;

    let Some(body) = rest.strip_prefix('[') else {
        // Unlabeled source: only the target can make this a labeled edge.
        let (target, target_label) = edge_tail(rest)?;
        let target_label = target_label?;
        return Some(Statement::LabeledEdge {
            source: Endpoint { id: source, label: None },
            target: Endpoint { id: target, label: Some(target_label) },
        });
    };

    // The source label ends at the first `]` after which the rest of the line
    // still reads as an edge.
    body.match_indices(']').find_map(|(idx, _)| {
        let label = &body[..idx];
        if label.is_empty() {
            return None;
        }
        let (target, target_label) = edge_tail(&body[idx + 1..])?;
        Some(Statement::LabeledEdge {
            source: Endpoint { id: source, label: Some(label) },
            target: Endpoint { id: target, label: target_label },
        })
    })
}

fn match_bare_edge(line: &str) -> Option<Statement<'_>> {
    let (source, rest) = split_ident(line)?;
    match edge_tail(rest)? {
        (target, None) => Some(Statement::BareEdge { source, target }),
        (_, Some(_)) => None,
    }
}

fn match_node_decl(line: &str) -> Option<Statement<'_>> {
    let (id, rest) = split_ident(line)?;
    let label = bracketed_to_end(rest)?;
    Some(Statement::NodeDecl { id, label })
}

fn match_bare_ref(line: &str) -> Option<Statement<'_>> {
    let (id, rest) = split_ident(line)?;
    rest.is_empty().then_some(Statement::BareRef { id })
}

// =============================================================================
// HELPERS
// =============================================================================

/// Match `\s*-->\s*ID` optionally followed by `[label]` up to end of line.
fn edge_tail(rest: &str) -> Option<(&str, Option<&str>)> {
    let rest = rest.trim_start().strip_prefix("-->")?.trim_start();
    let (target, rest) = split_ident(rest)?;
    if rest.is_empty() {
        return Some((target, None));
    }
    let label = bracketed_to_end(rest)?;
    Some((target, Some(label)))
}

/// Match `[label]` spanning the whole slice. The label may contain `]` but
/// must not be empty.
fn bracketed_to_end(rest: &str) -> Option<&str> {
    let label = rest.strip_prefix('[')?.strip_suffix(']')?;
    (!label.is_empty()).then_some(label)
}

pub(super) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split a leading identifier from the rest of the slice.
pub(super) fn split_ident(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !is_word_char(c)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
