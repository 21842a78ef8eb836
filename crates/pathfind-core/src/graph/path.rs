//! Path reconstruction from Dijkstra predecessor tables

use crate::graph::types::{Weight, INF};

/// Walk the predecessor table back from `destination` to the source.
///
/// Returns the vertices in source-to-destination order, or an empty vector
/// when `destination` is unreachable (or outside the tables).
pub fn reconstruct(
    distances: &[Weight],
    predecessors: &[Option<usize>],
    destination: usize,
) -> Vec<usize> {
    match distances.get(destination) {
        Some(&d) if d != INF => {}
        _ => return Vec::new(),
    }

    let mut path = Vec::new();
    let mut current = Some(destination);
    while let Some(vertex) = current {
        path.push(vertex);
        // Cyclic tables never reach `None`
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        current = predecessors.get(vertex).copied().flatten();
    }

    path.reverse();
    path
}
