use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::path::reconstruct;
use crate::graph::types::{Graph, Weight, INF};
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Frontier entry, ordered by tentative distance then insertion sequence.
///
/// The sequence number makes equal-distance pops follow push order, so
/// results are reproducible across runs.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    vertex: usize,
    distance: Weight,
    seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Distance and predecessor tables produced by one Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: usize,
    /// Minimum cost from `source`; `INF` when unreachable
    pub distances: Vec<Weight>,
    /// Vertex each entry was last relaxed from; `None` for the source and
    /// unreachable vertices
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn distance(&self, vertex: usize) -> Option<Weight> {
        self.distances.get(vertex).copied().filter(|&d| d != INF)
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Vertex sequence from the source to `destination`, empty if unreachable
    pub fn path_to(&self, destination: usize) -> Result<Vec<usize>> {
        ensure_vertex!(destination, self.distances.len());
        Ok(reconstruct(
            &self.distances,
            &self.predecessors,
            destination,
        ))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
    stale_pops: usize,
}

impl DijkstraState {
    fn new(vertex_count: usize) -> Self {
        Self {
            distances: vec![INF; vertex_count],
            predecessors: vec![None; vertex_count],
            visited: vec![false; vertex_count],
            heap: BinaryHeap::new(),
            next_seq: 0,
            stale_pops: 0,
        }
    }

    fn push(&mut self, vertex: usize, distance: Weight) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }
}

/// Compute single-source shortest paths with Dijkstra's algorithm.
///
/// Uses lazy deletion: a vertex may sit in the frontier several times and
/// entries popped after it is settled are skipped. Weights are unsigned, so
/// every settled distance is final.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    let n = graph.vertex_count();
    ensure_vertex!(source, n);

    let mut state = DijkstraState::new(n);
    state.distances[source] = 0;
    state.push(source, 0);

    let mut settled = 0usize;
    while let Some(Reverse(HeapEntry { vertex: u, .. })) = state.heap.pop() {
        if state.visited[u] {
            state.stale_pops += 1;
            continue;
        }
        state.visited[u] = true;
        settled += 1;

        let base = state.distances[u];
        for edge in graph.edges(u) {
            let v = edge.dst;
            if state.visited[v] {
                continue;
            }
            let candidate = base.saturating_add(edge.weight);
            if candidate < state.distances[v] {
                state.distances[v] = candidate;
                state.predecessors[v] = Some(u);
                state.push(v, candidate);
            }
        }
    }

    tracing::debug!(
        settled,
        stale_pops = state.stale_pops,
        pushes = state.next_seq,
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}

#[cfg(test)]
mod tests;
