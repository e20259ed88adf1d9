use super::*;

fn ids(nodes: &[MindmapNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.id.as_str()).collect()
}

// =============================================================================
// classify_tree_line
// =============================================================================

#[test]
fn tree_line_node_with_square_or_round_brackets() {
    assert_eq!(classify_tree_line("A[Root]"), Some(TreeStatement::Node { id: "A", label: "Root" }));
    assert_eq!(classify_tree_line("A(Root)"), Some(TreeStatement::Node { id: "A", label: "Root" }));
    assert_eq!(classify_tree_line("A  (Root)"), Some(TreeStatement::Node { id: "A", label: "Root" }));
}

#[test]
fn tree_line_brackets_need_not_pair() {
    assert_eq!(classify_tree_line("A[Root)"), Some(TreeStatement::Node { id: "A", label: "Root" }));
}

#[test]
fn tree_line_edge_with_target_label_and_terminator() {
    assert_eq!(
        classify_tree_line("A --> B(Child);"),
        Some(TreeStatement::Edge { source: "A", source_label: None, target: "B", target_label: Some("Child") })
    );
    assert_eq!(
        classify_tree_line("A-->B;"),
        Some(TreeStatement::Edge { source: "A", source_label: None, target: "B", target_label: None })
    );
}

#[test]
fn tree_line_edge_with_source_label() {
    assert_eq!(
        classify_tree_line("A[Root] --> B[Child1]"),
        Some(TreeStatement::Edge {
            source: "A",
            source_label: Some("Root"),
            target: "B",
            target_label: Some("Child1"),
        })
    );
}

#[test]
fn tree_line_rejects_unknown_shapes() {
    for line in ["???", "A[]", "A[Root];", "A --> B extra", "A --> B[x]y", "A -> B", "(Root)"] {
        assert_eq!(classify_tree_line(line), None, "line {line:?} should not classify");
    }
}

// =============================================================================
// parse_tree
// =============================================================================

#[test]
fn parse_tree_single_root_with_ordered_children() {
    let roots = parse_tree("A[Root] --> B[Child1]\nA --> C[Child2]");
    assert_eq!(roots.len(), 1);
    let root = &roots[0];
    assert_eq!(root.id, "A");
    assert_eq!(root.label, "Root");
    assert_eq!(ids(&root.children), vec!["B", "C"]);
    assert_eq!(root.children[0].label, "Child1");
    assert_eq!(root.children[1].label, "Child2");
    assert!(root.children[0].children.is_empty());
}

#[test]
fn parse_tree_skips_directive_and_unknown_lines() {
    let roots = parse_tree("graph TD;\n???\nA(Topic)\nA --> B;\n%% comment");
    assert_eq!(ids(&roots), vec!["A"]);
    assert_eq!(roots[0].label, "Topic");
    assert_eq!(ids(&roots[0].children), vec!["B"]);
}

#[test]
fn parse_tree_applies_late_label_everywhere() {
    let roots = parse_tree("A --> B\nB(Child)");
    assert_eq!(roots[0].children[0].label, "Child");
}

#[test]
fn parse_tree_keeps_first_explicit_label() {
    let roots = parse_tree("A[First]\nA[Second]");
    assert_eq!(roots[0].label, "First");
}

#[test]
fn parse_tree_isolated_nodes_are_roots_in_registry_order() {
    // A bare `Y` has no tree shape and is skipped.
    let roots = parse_tree("X[Lonely]\nA --> B\nY");
    assert_eq!(ids(&roots), vec!["X", "A"]);
    assert!(roots[0].children.is_empty());
    assert_eq!(ids(&roots[1].children), vec!["B"]);
}

#[test]
fn parse_tree_duplicates_reconvergent_targets() {
    let roots = parse_tree("A --> B\nA --> C\nB --> D[Shared]\nC --> D");
    assert_eq!(ids(&roots), vec!["A"]);
    let b = &roots[0].children[0];
    let c = &roots[0].children[1];
    assert_eq!(ids(&b.children), vec!["D"]);
    assert_eq!(ids(&c.children), vec!["D"]);
    assert_eq!(b.children[0], c.children[0]);
    assert_eq!(b.children[0].label, "Shared");
}

#[test]
fn parse_tree_cuts_back_edges() {
    let roots = parse_tree("A --> B\nB --> C\nC --> B");
    assert_eq!(ids(&roots), vec!["A"]);
    let b = &roots[0].children[0];
    let c = &b.children[0];
    assert_eq!(c.id, "C");
    assert!(c.children.is_empty());
}

#[test]
fn parse_tree_pure_cycle_has_no_roots() {
    assert!(parse_tree("A --> B\nB --> A").is_empty());
}

#[test]
fn parse_tree_empty_input() {
    assert!(parse_tree("").is_empty());
    assert!(parse_tree("graph TD").is_empty());
}
