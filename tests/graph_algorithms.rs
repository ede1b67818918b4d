//! Integration tests for the directed-graph core
//!
//! Exercises traversal, condensation and the shortest-path algorithms
//! together on larger fixtures than the unit tests use, including the
//! cross-checks between algorithms that must agree.

use anchor_layout::graph::{DirectedGraph, INFINITE};

/// Assert that `order` is a topological order of `graph`: every edge must
/// point from an earlier position to a later one.
fn assert_topological<T>(graph: &DirectedGraph<T>, order: &[usize]) {
    let mut position = vec![0usize; graph.vertex_count()];
    for (rank, &vertex) in order.iter().enumerate() {
        position[vertex] = rank;
    }
    for vertex in 0..graph.vertex_count() {
        for edge in graph.edges_from(vertex) {
            assert!(
                position[edge.source] < position[edge.destination],
                "edge {} -> {} violates the order {:?}",
                edge.source,
                edge.destination,
                order
            );
        }
    }
}

/// Pipeline-shaped DAG: every stage depends on the previous one, and the
/// final stage additionally depends on an early one.
fn pipeline() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::from_values(vec![
        "config", "parse", "resolve", "codegen", "link", "verify",
    ]);
    graph.push_edge(0, 1, 0);
    graph.push_edge(1, 2, 0);
    graph.push_edge(2, 3, 0);
    graph.push_edge(3, 4, 0);
    graph.push_edge(2, 5, 0);
    graph.push_edge(4, 5, 0);
    graph
}

/// Strongly-connected weighted mesh with a known shortest-path tree from 0.
fn weighted_mesh() -> DirectedGraph<&'static str> {
    let mut graph = DirectedGraph::from_values(vec!["s", "t", "x", "y", "z"]);
    graph.push_edge(0, 1, 10);
    graph.push_edge(0, 3, 5);
    graph.push_edge(1, 2, 1);
    graph.push_edge(1, 3, 2);
    graph.push_edge(2, 4, 4);
    graph.push_edge(3, 1, 3);
    graph.push_edge(3, 2, 9);
    graph.push_edge(3, 4, 2);
    graph.push_edge(4, 2, 6);
    graph.push_edge(4, 0, 7);
    graph
}

#[test]
fn test_reversed_postorder_is_topological() {
    let graph = pipeline();
    let mut order = graph.postorder(0);
    assert_eq!(order.len(), graph.vertex_count());

    order.reverse();
    assert_topological(&graph, &order);
    // The start vertex has no incoming edges, so it leads the order.
    assert_eq!(order[0], 0);
}

#[test]
fn test_acyclic_graph_condenses_to_singletons() {
    let graph = pipeline();
    let condensation = graph.strongly_connected();

    assert_eq!(condensation.vertex_count(), graph.vertex_count());
    assert_eq!(condensation.edge_count(), graph.edge_count());
    for component in condensation.vertices() {
        assert_eq!(component.value.len(), 1);
        let index = component.index();
        assert!(
            condensation
                .edges_from(index)
                .iter()
                .all(|edge| edge.destination != index),
            "acyclic input must not produce self-loops"
        );
    }
}

#[test]
fn test_two_cycles_collapse_to_two_components() {
    // Two triangles joined by a single bridge edge.
    let mut graph = DirectedGraph::from_values(vec!["a", "b", "c", "d", "e", "f"]);
    graph.push_edge(0, 1, 0);
    graph.push_edge(1, 2, 0);
    graph.push_edge(2, 0, 0);
    graph.push_edge(3, 4, 0);
    graph.push_edge(4, 5, 0);
    graph.push_edge(5, 3, 0);
    graph.push_edge(2, 3, 0);

    let condensation = graph.strongly_connected();
    assert_eq!(condensation.vertex_count(), 2);
    // Every original edge survives remapping, including internal ones.
    assert_eq!(condensation.edge_count(), 7);

    let mut first = condensation.vertex(0).value.clone();
    first.sort();
    assert_eq!(first, vec!["a", "b", "c"]);
    let mut second = condensation.vertex(1).value.clone();
    second.sort();
    assert_eq!(second, vec!["d", "e", "f"]);

    // Three internal edges per triangle become self-loops; the bridge is
    // the only edge between the components.
    let bridges = condensation
        .edges_from(0)
        .iter()
        .filter(|edge| edge.destination == 1)
        .count();
    assert_eq!(bridges, 1);
    assert_eq!(condensation.edges_from(0).len(), 4);
    assert_eq!(condensation.edges_from(1).len(), 3);
}

#[test]
fn test_dijkstra_shortest_path_tree() {
    let graph = weighted_mesh();

    let to_t = graph.dijkstra(0, 1);
    assert_eq!(to_t.path, vec![0, 3, 1]);
    assert_eq!(to_t.weight, 8);

    let to_x = graph.dijkstra(0, 2);
    assert_eq!(to_x.path, vec![0, 3, 1, 2]);
    assert_eq!(to_x.weight, 9);

    let to_z = graph.dijkstra(0, 4);
    assert_eq!(to_z.path, vec![0, 3, 4]);
    assert_eq!(to_z.weight, 7);
}

#[test]
fn test_floyd_warshall_agrees_with_dijkstra_on_every_pair() {
    let graph = weighted_mesh();
    let matrix = graph.floyd_warshall();

    for source in 0..graph.vertex_count() {
        for destination in 0..graph.vertex_count() {
            assert_eq!(
                matrix[source][destination],
                graph.dijkstra(source, destination).weight,
                "disagreement for {} -> {}",
                source,
                destination
            );
        }
    }
}

#[test]
fn test_bellman_ford_with_negative_edges() {
    let mut graph = DirectedGraph::from_values(vec!["s", "t", "x", "y", "z"]);
    graph.push_edge(0, 1, 6);
    graph.push_edge(0, 3, 7);
    graph.push_edge(1, 2, 5);
    graph.push_edge(1, 3, 8);
    graph.push_edge(1, 4, -4);
    graph.push_edge(2, 1, -2);
    graph.push_edge(3, 2, -3);
    graph.push_edge(3, 4, 9);
    graph.push_edge(4, 2, 7);
    graph.push_edge(4, 0, 2);

    let result = graph.bellman_ford(0);
    assert!(!result.has_negative_cycle);
    assert_eq!(result.distances, vec![0, 2, 4, 7, -2]);
    // The shortest-path tree here is unique, so parents are fixed.
    assert_eq!(
        result.parents,
        vec![None, Some(2), Some(3), Some(0), Some(1)]
    );

    // Negative edges are fine for Floyd-Warshall too; the source row must
    // match Bellman-Ford exactly.
    let matrix = graph.floyd_warshall();
    assert_eq!(matrix[0], result.distances);
}

#[test]
fn test_bellman_ford_flags_reachable_negative_cycle() {
    let mut graph = DirectedGraph::from_values(vec![(); 4]);
    graph.push_edge(0, 1, -1);
    graph.push_edge(1, 2, -1);
    graph.push_edge(2, 0, -3);
    graph.push_edge(2, 3, 1);

    assert!(graph.bellman_ford(0).has_negative_cycle);
}

#[test]
fn test_unreachable_pairs_stay_infinite_everywhere() {
    let mut graph = DirectedGraph::from_values(vec!["island", "mainland"]);
    graph.push_edge(1, 0, 3);

    let unreachable = graph.dijkstra(0, 1);
    assert_eq!(unreachable.weight, INFINITE);
    assert!(unreachable.path.is_empty());

    let matrix = graph.floyd_warshall();
    assert_eq!(matrix[0][1], INFINITE);
    assert_eq!(matrix[1][0], 3);

    let result = graph.bellman_ford(0);
    assert_eq!(result.distances, vec![0, INFINITE]);
    assert!(!result.has_negative_cycle);
}
