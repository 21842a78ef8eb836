//! Weighted directed graphs and shortest paths
//!
//! Provides:
//! - `Graph` adjacency lists with non-negative integer weights
//! - Dijkstra single-source shortest paths
//! - Path reconstruction from a predecessor table

pub mod dijkstra;
pub mod path;
pub mod types;

pub use dijkstra::{shortest_paths, ShortestPaths};
pub use path::reconstruct;
pub use types::{Edge, Graph, Weight, INF, MAX_VERTEX_COUNT};
