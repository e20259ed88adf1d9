use super::*;

fn endpoint<'a>(id: &'a str, label: Option<&'a str>) -> Endpoint<'a> {
    Endpoint { id, label }
}

// =============================================================================
// statements
// =============================================================================

#[test]
fn statements_trim_and_drop_blank_and_directive_lines() {
    let input = "graph TD\n\n   A[Start]  \n\t\nB --> C\r\n";
    let lines: Vec<&str> = statements(input).collect();
    assert_eq!(lines, vec!["A[Start]", "B --> C"]);
}

#[test]
fn statements_directive_match_is_a_case_sensitive_prefix() {
    let lines: Vec<&str> = statements("graphite\nGraph TD\ngraph LR").collect();
    assert_eq!(lines, vec!["Graph TD"]);
}

#[test]
fn statements_iterator_restarts_when_cloned() {
    let iter = statements("A\nB");
    let first: Vec<&str> = iter.clone().collect();
    let second: Vec<&str> = iter.collect();
    assert_eq!(first, second);
}

// =============================================================================
// labeled edges
// =============================================================================

#[test]
fn classify_edge_with_both_labels() {
    assert_eq!(
        classify("A[Start] --> B[End]"),
        Some(Statement::LabeledEdge { source: endpoint("A", Some("Start")), target: endpoint("B", Some("End")) })
    );
}

#[test]
fn classify_edge_with_target_label_only() {
    assert_eq!(
        classify("B --> C[End]"),
        Some(Statement::LabeledEdge { source: endpoint("B", None), target: endpoint("C", Some("End")) })
    );
}

#[test]
fn classify_edge_with_source_label_only() {
    assert_eq!(
        classify("A[Start]-->B"),
        Some(Statement::LabeledEdge { source: endpoint("A", Some("Start")), target: endpoint("B", None) })
    );
}

#[test]
fn classify_labels_keep_inner_spaces_and_punctuation() {
    assert_eq!(
        classify("Intro[What is Rust?] --> Own[Ownership & Borrowing]"),
        Some(Statement::LabeledEdge {
            source: endpoint("Intro", Some("What is Rust?")),
            target: endpoint("Own", Some("Ownership & Borrowing")),
        })
    );
}

#[test]
fn classify_source_label_extends_past_bracket_when_needed() {
    assert_eq!(
        classify("A[x] y] --> B"),
        Some(Statement::LabeledEdge { source: endpoint("A", Some("x] y")), target: endpoint("B", None) })
    );
}

#[test]
fn classify_target_label_runs_to_last_bracket() {
    assert_eq!(
        classify("A --> B[list [x]]"),
        Some(Statement::LabeledEdge { source: endpoint("A", None), target: endpoint("B", Some("list [x]")) })
    );
}

// =============================================================================
// bare edges, declarations, references
// =============================================================================

#[test]
fn classify_bare_edge_with_and_without_spaces() {
    assert_eq!(classify("A --> B"), Some(Statement::BareEdge { source: "A", target: "B" }));
    assert_eq!(classify("A-->B"), Some(Statement::BareEdge { source: "A", target: "B" }));
    assert_eq!(classify("node_1   -->   node_2"), Some(Statement::BareEdge { source: "node_1", target: "node_2" }));
}

#[test]
fn classify_node_declaration() {
    assert_eq!(classify("A[Start]"), Some(Statement::NodeDecl { id: "A", label: "Start" }));
}

#[test]
fn classify_node_declaration_label_may_hold_brackets() {
    assert_eq!(classify("A[Vec[T]]"), Some(Statement::NodeDecl { id: "A", label: "Vec[T]" }));
}

#[test]
fn classify_bare_reference() {
    assert_eq!(classify("Alpha_2"), Some(Statement::BareRef { id: "Alpha_2" }));
}

// =============================================================================
// unrecognized shapes
// =============================================================================

#[test]
fn classify_rejects_unknown_shapes() {
    for line in [
        "???",
        "A --> ",
        "--> B",
        "A[]",
        "A [Start]",
        "A --> B --> C",
        "A --- B",
        "A(Round)",
        "A B",
        "Über",
    ] {
        assert_eq!(classify(line), None, "line {line:?} should not classify");
    }
}

#[test]
fn classify_edge_shapes_take_priority_over_declarations() {
    // `A[x] --> B[y]` also ends with `]`, but must not read as a declaration of A.
    assert!(matches!(classify("A[x] --> B[y]"), Some(Statement::LabeledEdge { .. })));
}

// =============================================================================
// split_ident
// =============================================================================

#[test]
fn split_ident_stops_at_first_non_word_char() {
    assert_eq!(split_ident("abc_1[x]"), Some(("abc_1", "[x]")));
    assert_eq!(split_ident("abc"), Some(("abc", "")));
    assert_eq!(split_ident("[x]"), None);
    assert_eq!(split_ident(""), None);
}
