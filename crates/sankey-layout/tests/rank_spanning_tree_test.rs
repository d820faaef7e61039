use sankey_layout::graphlib::{EdgeKey, Graph};
use sankey_layout::rank::{NodeRelationship, find_spanning_tree, node_relationship};
use sankey_layout::{Error, FlowEdgeLabel, FlowNodeLabel};

type FlowGraph = Graph<FlowNodeLabel, FlowEdgeLabel>;

fn graph_from(edges: &[(&str, &str)]) -> FlowGraph {
    let mut g = FlowGraph::default();
    for &(v, w) in edges {
        g.set_edge(v, w);
    }
    g
}

fn keys(edges: &[(&str, &str)]) -> Vec<EdgeKey> {
    edges.iter().map(|&(v, w)| EdgeKey::simple(v, w)).collect()
}

#[test]
fn find_spanning_tree_follows_edge_insertion_order() {
    let g = graph_from(&[("a", "b"), ("b", "c"), ("a", "c"), ("b", "d"), ("d", "a")]);
    let tree = find_spanning_tree(&g, "a").unwrap();

    assert_eq!(tree.nodes().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    let records: Vec<(usize, &str)> = tree
        .nodes()
        .map(|v| (tree.depth(v).unwrap(), tree.thread(v).unwrap()))
        .collect();
    assert_eq!(records, vec![(0, "b"), (1, "c"), (2, "d"), (2, "a")]);
    assert_eq!(tree.edges(), keys(&[("a", "b"), ("b", "c"), ("b", "d")]).as_slice());
    assert_eq!(tree.root(), Some("a"));
    assert_eq!(tree.parent("d"), Some("b"));
    assert_eq!(tree.parent("a"), None);
}

#[test]
fn find_spanning_tree_changes_with_insertion_order() {
    let g = graph_from(&[("a", "c"), ("a", "b"), ("b", "c"), ("b", "d"), ("d", "a")]);
    let tree = find_spanning_tree(&g, "a").unwrap();

    assert_eq!(tree.nodes().collect::<Vec<_>>(), vec!["a", "c", "b", "d"]);
    assert_eq!(tree.edges(), keys(&[("a", "c"), ("a", "b"), ("b", "d")]).as_slice());
    assert_eq!(tree.depth("c"), Some(1));
    assert_eq!(tree.depth("b"), Some(1));
    assert_eq!(tree.depth("d"), Some(2));
}

#[test]
fn find_spanning_tree_does_not_sort_numeric_ids() {
    let g1 = graph_from(&[("0", "1"), ("1", "2"), ("0", "2")]);
    let g2 = graph_from(&[("0", "2"), ("0", "1"), ("1", "2")]);

    let tree1 = find_spanning_tree(&g1, "0").unwrap();
    let tree2 = find_spanning_tree(&g2, "0").unwrap();

    assert_eq!(tree1.edges(), keys(&[("0", "1"), ("1", "2")]).as_slice());
    assert_eq!(tree2.edges(), keys(&[("0", "2"), ("0", "1")]).as_slice());
}

#[test]
fn find_spanning_tree_rejects_a_missing_root() {
    let g = graph_from(&[("a", "b")]);
    assert_eq!(
        find_spanning_tree(&g, "z").unwrap_err(),
        Error::InvalidRoot {
            root: "z".to_string()
        }
    );
}

#[test]
fn find_spanning_tree_covers_only_the_reachable_component() {
    let g = graph_from(&[("a", "b"), ("c", "d"), ("d", "a")]);
    let tree = find_spanning_tree(&g, "a").unwrap();

    assert_eq!(tree.len(), 2);
    assert!(tree.contains("b"));
    assert!(!tree.contains("c"));
    assert!(!tree.contains("d"));
    assert_eq!(tree.thread("b"), Some("a"));
}

#[test]
fn find_spanning_tree_of_a_lone_root_threads_to_itself() {
    let mut g = FlowGraph::default();
    g.set_node("only", FlowNodeLabel::default());
    let tree = find_spanning_tree(&g, "only").unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.depth("only"), Some(0));
    assert_eq!(tree.thread("only"), Some("only"));
    assert!(tree.edges().is_empty());
}

#[test]
fn find_spanning_tree_keeps_edge_names() {
    let mut g = FlowGraph::default();
    g.set_edge_named("d", "e", Some("iron"), None);
    g.set_edge_named("d", "e", Some("coal"), None);
    let tree = find_spanning_tree(&g, "d").unwrap();

    assert_eq!(tree.edges(), &[EdgeKey::new("d", "e", Some("iron"))]);
    assert!(!tree.contains_edge(&EdgeKey::new("d", "e", Some("coal"))));
}

#[test]
fn thread_visits_every_node_once_from_any_start() {
    let g = graph_from(&[
        ("r", "a"),
        ("a", "b"),
        ("a", "c"),
        ("r", "d"),
        ("d", "e"),
        ("e", "r"),
        ("c", "a"),
    ]);
    let tree = find_spanning_tree(&g, "r").unwrap();
    let all: Vec<&str> = tree.nodes().collect();

    for start in &all {
        let mut seen: Vec<&str> = vec![*start];
        let mut cur = tree.thread(start).unwrap();
        while cur != *start {
            seen.push(cur);
            cur = tree.thread(cur).unwrap();
        }
        seen.sort_unstable();
        let mut expected = all.clone();
        expected.sort_unstable();
        assert_eq!(seen, expected, "thread ring from {start}");
    }
}

#[test]
fn node_relationship_classifies_tree_nodes() {
    //           ,- c
    //  a -- b -<
    //           `- d
    let g = graph_from(&[("a", "b"), ("b", "c"), ("b", "d")]);
    let tree = find_spanning_tree(&g, "a").unwrap();

    assert_eq!(node_relationship(&tree, "a", "b"), NodeRelationship::Descendant);
    assert_eq!(node_relationship(&tree, "b", "d"), NodeRelationship::Descendant);
    assert_eq!(node_relationship(&tree, "c", "b"), NodeRelationship::Ancestor);
    assert_eq!(node_relationship(&tree, "c", "d"), NodeRelationship::Unrelated);

    assert_eq!(node_relationship(&tree, "a", "d").sign(), 1);
    assert_eq!(node_relationship(&tree, "d", "a").sign(), -1);
    assert_eq!(node_relationship(&tree, "d", "c").sign(), 0);
}

#[test]
fn node_relationship_is_antisymmetric() {
    let g = graph_from(&[
        ("a", "b"),
        ("b", "c"),
        ("c", "d"),
        ("a", "e"),
        ("e", "f"),
        ("b", "g"),
        ("f", "b"),
    ]);
    let tree = find_spanning_tree(&g, "a").unwrap();
    let ids: Vec<&str> = tree.nodes().collect();

    for u in &ids {
        for v in &ids {
            assert_eq!(
                node_relationship(&tree, u, v),
                node_relationship(&tree, v, u).inverse(),
                "{u} / {v}"
            );
        }
    }
}

#[test]
fn node_relationship_stops_at_the_end_of_a_subtree() {
    let g = graph_from(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "e")]);
    let tree = find_spanning_tree(&g, "a").unwrap();

    assert_eq!(node_relationship(&tree, "a", "d"), NodeRelationship::Descendant);
    assert_eq!(node_relationship(&tree, "b", "d"), NodeRelationship::Descendant);
    assert_eq!(node_relationship(&tree, "e", "d"), NodeRelationship::Unrelated);
    assert_eq!(node_relationship(&tree, "c", "e"), NodeRelationship::Unrelated);
    assert_eq!(node_relationship(&tree, "b", "e"), NodeRelationship::Unrelated);
}

#[test]
fn node_relationship_treats_self_and_unknown_ids_as_unrelated() {
    let g = graph_from(&[("a", "b")]);
    let tree = find_spanning_tree(&g, "a").unwrap();

    assert_eq!(node_relationship(&tree, "a", "a"), NodeRelationship::Unrelated);
    assert_eq!(node_relationship(&tree, "a", "zz"), NodeRelationship::Unrelated);
    assert_eq!(node_relationship(&tree, "zz", "b"), NodeRelationship::Unrelated);
}

/// Whether `v` is a proper descendant of `u`, by climbing parents from `v`.
fn below_by_parents(tree: &sankey_layout::SpanningTree, u: &str, v: &str) -> bool {
    let mut cur = tree.parent(v);
    while let Some(p) = cur {
        if p == u {
            return true;
        }
        cur = tree.parent(p);
    }
    false
}

#[test]
fn node_relationship_agrees_with_parent_chains() {
    let g = graph_from(&[
        ("r", "a"),
        ("a", "b"),
        ("b", "c"),
        ("a", "d"),
        ("d", "e"),
        ("e", "b"),
        ("r", "f"),
        ("f", "g"),
        ("g", "d"),
        ("f", "h"),
        ("h", "r"),
    ]);
    let tree = find_spanning_tree(&g, "r").unwrap();
    let ids: Vec<&str> = tree.nodes().collect();
    assert_eq!(ids.len(), 9);

    for u in &ids {
        for v in &ids {
            let expected = if below_by_parents(&tree, u, v) {
                NodeRelationship::Descendant
            } else if below_by_parents(&tree, v, u) {
                NodeRelationship::Ancestor
            } else {
                NodeRelationship::Unrelated
            };
            assert_eq!(node_relationship(&tree, u, v), expected, "{u} / {v}");
        }
    }
}

#[test]
fn subtree_end_closes_each_subtree_in_preorder() {
    let g = graph_from(&[("a", "b"), ("b", "c"), ("b", "d"), ("a", "e")]);
    let tree = find_spanning_tree(&g, "a").unwrap();

    assert_eq!(tree.nodes().collect::<Vec<_>>(), vec!["a", "b", "c", "d", "e"]);
    let end = |id: &str| tree.node(id).unwrap().subtree_end;
    assert_eq!(end("a"), 5);
    assert_eq!(end("b"), 4);
    assert_eq!(end("c"), 3);
    assert_eq!(end("d"), 4);
    assert_eq!(end("e"), 5);
}

#[test]
fn node_relationship_on_a_long_chain() {
    let len = 100_000;
    let mut g = FlowGraph::default();
    for i in 1..len {
        g.set_edge(format!("n{}", i - 1), format!("n{i}"));
    }
    let tree = find_spanning_tree(&g, "n0").unwrap();
    let last = format!("n{}", len - 1);

    assert_eq!(tree.depth(&last), Some(len - 1));
    for i in 0..len - 1 {
        let v = format!("n{i}");
        assert_eq!(node_relationship(&tree, &v, &last), NodeRelationship::Descendant);
        assert_eq!(node_relationship(&tree, &last, &v), NodeRelationship::Ancestor);
    }
}
