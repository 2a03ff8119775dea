use lanegraph::Graph;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone)]
enum Operation {
    AddNode(u8),
    AddEdge(u8, u8),
    RemoveNode(u8),
    RemoveEdge(u8, u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    // A small key space keeps collisions (repeats, self-edges, removals of
    // present nodes) frequent.
    prop_oneof![
        (0u8..12).prop_map(Operation::AddNode),
        (0u8..12, 0u8..12).prop_map(|(a, b)| Operation::AddEdge(a, b)),
        (0u8..12).prop_map(Operation::RemoveNode),
        (0u8..12, 0u8..12).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
    ]
}

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..16, 0u8..16), 0..48)
}

fn key(a: u8, b: u8) -> (u8, u8) {
    (a.min(b), a.max(b))
}

proptest! {
    #[test]
    fn test_graph_matches_edge_set_model(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph = Graph::new();
        let mut nodes: BTreeSet<u8> = BTreeSet::new();
        let mut edges: BTreeSet<(u8, u8)> = BTreeSet::new();

        for op in ops {
            match op {
                Operation::AddNode(n) => {
                    assert_eq!(graph.add_node(n), nodes.insert(n));
                }
                Operation::AddEdge(a, b) => {
                    let created = graph.add_edge(a, b);
                    if a == b {
                        assert!(!created, "self-edge {a} was stored");
                    } else {
                        nodes.insert(a);
                        nodes.insert(b);
                        assert_eq!(created, edges.insert(key(a, b)));
                    }
                }
                Operation::RemoveNode(n) => {
                    let removed = graph.remove_node(&n);
                    assert_eq!(removed, nodes.remove(&n));
                    edges.retain(|&(a, b)| a != n && b != n);
                }
                Operation::RemoveEdge(a, b) => {
                    let removed = graph.remove_edge(&a, &b);
                    assert_eq!(removed, a != b && edges.remove(&key(a, b)));
                }
            }

            assert_eq!(graph.validate(), Ok(()));
            assert_eq!(graph.node_count(), nodes.len());
            assert_eq!(graph.edge_count(), edges.len());
        }

        for a in 0u8..12 {
            assert_eq!(graph.has_node(&a), nodes.contains(&a));
            for b in 0u8..12 {
                assert_eq!(graph.has_edge(&a, &b), graph.has_edge(&b, &a));
                assert_eq!(graph.has_edge(&a, &b), a != b && edges.contains(&key(a, b)));
            }
        }
    }

    #[test]
    fn test_greedy_coloring_is_proper(edges in edge_list()) {
        let graph = Graph::from_edges(edges);
        let coloring = graph.greedy_coloring();

        assert_eq!(coloring.len(), graph.node_count());
        assert!(coloring.is_proper_for(&graph));
        for node in graph.nodes() {
            let color = coloring.get(node).unwrap();
            let degree = graph.degree(node).unwrap();
            assert!(color <= degree, "first-fit never exceeds the degree");
        }
        assert_eq!(graph.greedy_coloring_by_component(), coloring);
    }

    #[test]
    fn test_components_partition_nodes(edges in edge_list(), extra in proptest::collection::vec(16u8..24, 0..6)) {
        let mut graph = Graph::from_edges(edges);
        for node in extra {
            graph.add_node(node);
        }

        let components = graph.connected_components();
        assert_eq!(components.len(), graph.component_count());

        let mut seen = HashSet::new();
        let mut edge_total = 0;
        for component in &components {
            assert_eq!(component.validate(), Ok(()));
            edge_total += component.edge_count();
            for node in component.nodes() {
                assert!(seen.insert(*node), "node {node} in two components");
                assert_eq!(&graph.connected_component(node), component);
            }
        }
        assert_eq!(seen.len(), graph.node_count());
        assert_eq!(edge_total, graph.edge_count());
    }

    #[test]
    fn test_equality_is_order_independent(edges in edge_list()) {
        let forward = Graph::from_edges(edges.clone());
        let backward: Graph<u8> = edges.iter().rev().map(|&(a, b)| (b, a)).collect();
        assert_eq!(&forward, &backward);

        if let Some((a, b)) = forward.edges().first().map(|&(a, b)| (*a, *b)) {
            let mut missing = backward.clone();
            missing.remove_edge(&a, &b);
            assert_ne!(forward, missing);
        }
    }
}
