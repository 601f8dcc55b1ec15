use route_finder::{DirectedGraph, Edge, Error, Graph};

fn abc_graph() -> DirectedGraph<&'static str> {
    DirectedGraph::new(vec![Edge::new("A", "B", 3.0), Edge::new("B", "C", 4.0)])
}

#[test]
fn test_contains_empty() {
    let graph: DirectedGraph<&str> = DirectedGraph::new(Vec::new());
    assert!(!graph.contains(&"D"));
    assert!(!graph.contains(&""));
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_empty());
}

#[test]
fn test_contains_ok() {
    let graph = abc_graph();
    assert!(graph.contains(&"A") && graph.contains(&"B") && graph.contains(&"C"));
}

#[test]
fn test_contains_not_ok() {
    let graph = abc_graph();
    assert!(!graph.contains(&"D"));
}

#[test]
fn test_nodes_in_first_appearance_order() {
    let graph = DirectedGraph::new(vec![
        Edge::new("C", "A", 1.0),
        Edge::new("A", "B", 1.0),
        Edge::new("B", "C", 1.0),
        Edge::new("D", "A", 1.0),
    ]);
    let nodes: Vec<&str> = graph.nodes().copied().collect();
    assert_eq!(nodes, vec!["C", "A", "B", "D"]);
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn test_edges_from_keeps_insertion_order_and_parallel_edges() {
    let graph = DirectedGraph::new(vec![
        Edge::new("A", "B", 5.0),
        Edge::new("B", "C", 1.0),
        Edge::new("A", "C", 10.0),
        Edge::new("A", "B", 2.0),
    ]);

    let from_a: Vec<(&str, f64)> = graph.edges_from(&"A").map(|e| (e.dest, e.cost)).collect();
    assert_eq!(from_a, vec![("B", 5.0), ("C", 10.0), ("B", 2.0)]);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edges()[1], Edge::new("B", "C", 1.0));
}

#[test]
fn test_edges_from_unknown_or_sink_node_is_empty() {
    let graph = abc_graph();
    assert_eq!(graph.edges_from(&"C").count(), 0);
    assert_eq!(graph.edges_from(&"Z").count(), 0);
}

#[test]
fn test_edges_are_directed() {
    let graph = abc_graph();
    assert!(graph.edges_from(&"B").all(|e| e.dest != "A"));
}

#[test]
fn test_collect_from_tuples() {
    let graph: DirectedGraph<String> = vec![
        ("x".to_string(), "y".to_string(), 1.5),
        ("y".to_string(), "z".to_string(), 2.5),
    ]
    .into_iter()
    .map(Edge::from)
    .collect();

    assert!(graph.contains(&"z".to_string()));
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_try_new_rejects_negative_cost() {
    let result = DirectedGraph::try_new(vec![
        Edge::new("A", "B", 1.0),
        Edge::new("B", "C", -2.0),
    ]);

    match result {
        Err(Error::NegativeCost { from, to, cost }) => {
            assert_eq!(from, "\"B\"");
            assert_eq!(to, "\"C\"");
            assert_eq!(cost, -2.0);
        }
        other => panic!("expected NegativeCost, got {:?}", other),
    }
}

#[test]
fn test_try_new_rejects_nan_cost() {
    let result = DirectedGraph::try_new(vec![Edge::new(1u32, 2u32, f64::NAN)]);
    assert!(matches!(result, Err(Error::NegativeCost { .. })));
}

#[test]
fn test_try_new_accepts_zero_and_positive_costs() {
    let graph = DirectedGraph::try_new(vec![Edge::new("A", "B", 0.0), Edge::new("B", "A", 7.0)])
        .expect("non-negative costs are valid");
    assert!(!graph.has_negative_costs());
}

#[test]
fn test_new_keeps_negative_costs() {
    let graph = DirectedGraph::new(vec![Edge::new("A", "B", -1.0)]);
    assert!(graph.has_negative_costs());
    assert!(graph.contains(&"B"));
}

#[test]
fn test_default_graph_is_empty() {
    let graph: DirectedGraph<u64, f32> = DirectedGraph::default();
    assert!(graph.is_empty());
    assert!(!graph.contains(&0));
}
