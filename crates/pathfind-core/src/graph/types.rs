use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::ensure_vertex;
use crate::error::{PathfindError, Result};

/// Edge weight. Unsigned, so negative weights cannot be represented.
pub type Weight = u64;

/// Distance sentinel for vertices not reachable from the source
pub const INF: Weight = Weight::MAX;

/// Largest vertex count accepted from a graph file
pub const MAX_VERTEX_COUNT: usize = 1 << 26;

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: usize, dst: usize, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}

/// Directed graph stored as per-vertex adjacency lists.
///
/// Outgoing edges keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Like `new`, but rejects counts above `MAX_VERTEX_COUNT` or that
    /// cannot be allocated
    fn with_vertex_limit(vertex_count: usize) -> Result<Self> {
        let too_large =
            || PathfindError::invalid_graph(1, format!("vertex count too large: {vertex_count}"));
        if vertex_count > MAX_VERTEX_COUNT {
            return Err(too_large());
        }
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| too_large())?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self { adjacency })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Append an edge to `src`'s adjacency list
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) -> Result<()> {
        let n = self.vertex_count();
        ensure_vertex!(src, n);
        ensure_vertex!(dst, n);
        self.adjacency[src].push(Edge::new(src, dst, weight));
        Ok(())
    }

    /// Outgoing edges of `vertex`; empty for out-of-range indices
    pub fn edges(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total weight of a vertex path, using the cheapest parallel edge per hop.
    ///
    /// Returns `None` if some hop has no edge. A single-vertex or empty path
    /// costs 0.
    pub fn path_cost(&self, path: &[usize]) -> Option<Weight> {
        path.windows(2).try_fold(0, |total: Weight, hop| {
            self.edges(hop[0])
                .iter()
                .filter(|edge| edge.dst == hop[1])
                .map(|edge| edge.weight)
                .min()
                .map(|weight| total.saturating_add(weight))
        })
    }

    /// Parse the whitespace-separated graph format.
    ///
    /// The first token is the vertex count; the rest are `src dst weight`
    /// triples. Token positions in errors are 1-based.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace().enumerate();

        let (_, first) = tokens
            .next()
            .ok_or_else(|| PathfindError::invalid_graph(1, "missing vertex count"))?;
        let vertex_count: usize = first.parse().map_err(|_| {
            PathfindError::invalid_graph(1, format!("vertex count is not an integer: {first}"))
        })?;

        let mut graph = Graph::with_vertex_limit(vertex_count)?;
        let mut triple = [0 as Weight; 3];
        let mut filled = 0;
        let mut last_position = 1;

        for (index, token) in tokens {
            let position = index + 1;
            last_position = position;
            triple[filled] = token.parse().map_err(|_| {
                PathfindError::invalid_graph(
                    position,
                    format!("expected a non-negative integer, found {token}"),
                )
            })?;
            filled += 1;

            if filled == 3 {
                let [src, dst, weight] = triple;
                graph.add_edge(vertex_index(src)?, vertex_index(dst)?, weight)?;
                filled = 0;
            }
        }

        if filled != 0 {
            return Err(PathfindError::invalid_graph(
                last_position,
                "incomplete edge (expected src dst weight)",
            ));
        }

        Ok(graph)
    }

    /// Load a graph file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PathfindError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)
            .map_err(|e| PathfindError::io_operation("read graph", path.display(), e))?;
        let graph = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
    }
}

fn vertex_index(raw: Weight) -> Result<usize> {
    usize::try_from(raw).map_err(|_| PathfindError::invalid_value("vertex", raw))
}
