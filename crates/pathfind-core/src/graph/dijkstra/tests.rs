use crate::error::PathfindError;
use crate::graph::dijkstra::*;
use crate::graph::types::{Graph, INF};

fn small_graph() -> Graph {
    Graph::parse("4\n0 1 1\n1 2 2\n0 2 5\n").unwrap()
}

/// Deterministic pseudo-random graph for property checks
fn generated_graph(seed: u64, vertices: usize, edges: usize) -> Graph {
    let mut state = seed;
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let mut graph = Graph::new(vertices);
    for _ in 0..edges {
        let src = next(vertices as u64) as usize;
        let dst = next(vertices as u64) as usize;
        let weight = next(20);
        graph.add_edge(src, dst, weight).unwrap();
    }
    graph
}

#[test]
fn test_small_graph_distances() {
    let result = shortest_paths(&small_graph(), 0).unwrap();
    assert_eq!(result.distances, vec![0, 1, 3, INF]);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1), None]);
    assert_eq!(result.path_to(2).unwrap(), vec![0, 1, 2]);
    assert!(result.path_to(3).unwrap().is_empty());
}

#[test]
fn test_source_distance_is_zero() {
    let result = shortest_paths(&small_graph(), 1).unwrap();
    assert_eq!(result.distance(1), Some(0));
    assert_eq!(result.distance(0), None);
    assert!(result.is_reachable(2));
    assert!(!result.is_reachable(3));
}

#[test]
fn test_invalid_source() {
    let err = shortest_paths(&small_graph(), 4).unwrap_err();
    assert!(matches!(
        err,
        PathfindError::InvalidVertex {
            vertex: 4,
            vertex_count: 4
        }
    ));
}

#[test]
fn test_path_to_invalid_destination() {
    let result = shortest_paths(&small_graph(), 0).unwrap();
    assert!(matches!(
        result.path_to(9),
        Err(PathfindError::InvalidVertex { vertex: 9, .. })
    ));
}

#[test]
fn test_zero_weight_edges_and_self_loops() {
    let graph = Graph::parse("3\n0 0 4\n0 1 0\n1 2 0\n2 0 1\n").unwrap();
    let result = shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![0, 0, 0]);
    assert_eq!(result.path_to(2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_relaxation_replaces_longer_first_discovery() {
    // 0->3 is discovered first at cost 10, then improved through 1 and 2
    let graph = Graph::parse("4\n0 3 10\n0 1 1\n1 2 1\n2 3 1\n").unwrap();
    let result = shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(3), Some(3));
    assert_eq!(result.path_to(3).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_equal_cost_ties_follow_insertion_order() {
    // Two routes of cost 2 to vertex 3; vertex 1 is pushed before vertex 2
    let graph = Graph::parse("4\n0 1 1\n0 2 1\n1 3 1\n2 3 1\n").unwrap();
    let first = shortest_paths(&graph, 0).unwrap();
    assert_eq!(first.path_to(3).unwrap(), vec![0, 1, 3]);

    let again = shortest_paths(&graph, 0).unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_huge_weights_do_not_overflow() {
    let graph = Graph::parse(&format!("3\n0 1 {}\n1 2 {}\n", u64::MAX - 1, 5)).unwrap();
    let result = shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance(1), Some(u64::MAX - 1));
    // Saturates to the sentinel, so the vertex stays unreached
    assert_eq!(result.distance(2), None);
}

#[test]
fn test_input_graph_is_untouched() {
    let graph = small_graph();
    let before = graph.clone();
    shortest_paths(&graph, 0).unwrap();
    assert_eq!(graph, before);
}

#[test]
fn test_relaxation_invariant_holds_at_fixed_point() {
    for seed in 1..=25 {
        let graph = generated_graph(seed, 12, 30);
        let result = shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances[0], 0);

        for u in 0..graph.vertex_count() {
            let Some(du) = result.distance(u) else {
                continue;
            };
            for edge in graph.edges(u) {
                assert!(
                    result.distances[edge.dst] <= du + edge.weight,
                    "seed {seed}: edge {u}->{} violates relaxation",
                    edge.dst
                );
            }
        }
    }
}

#[test]
fn test_reconstructed_path_cost_matches_distance() {
    for seed in 1..=25 {
        let graph = generated_graph(seed, 10, 25);
        let result = shortest_paths(&graph, 0).unwrap();

        for dest in 0..graph.vertex_count() {
            let path = result.path_to(dest).unwrap();
            match result.distance(dest) {
                Some(distance) => {
                    assert_eq!(path.first(), Some(&0));
                    assert_eq!(path.last(), Some(&dest));
                    assert_eq!(graph.path_cost(&path), Some(distance), "seed {seed}");
                }
                None => {
                    assert!(path.is_empty());
                    assert_eq!(result.predecessors[dest], None);
                }
            }
        }
    }
}
