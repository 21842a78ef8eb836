//! Word ladders
//!
//! A ladder is a sequence of dictionary words where each consecutive pair is
//! one single-character edit apart. The search is breadth-first over the
//! implicit adjacency graph of the dictionary, so the first ladder found is a
//! shortest one.

pub mod adjacency;
pub mod dictionary;
pub mod search;

pub use adjacency::{edit_distance, edit_distance_within, is_adjacent};
pub use dictionary::Dictionary;
pub use search::{find_ladder, search_ladder, LadderOptions, LadderOutcome};
