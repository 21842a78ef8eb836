//! Pathfind Core Library
//!
//! Core algorithms for the pathfind CLI: single-source shortest paths over
//! weighted directed graphs and shortest word ladders over a dictionary.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod logging;

pub use graph::{reconstruct, shortest_paths, Edge, Graph, ShortestPaths, INF};
pub use ladder::{
    edit_distance, edit_distance_within, find_ladder, is_adjacent, search_ladder, Dictionary,
    LadderOptions, LadderOutcome,
};
