//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default cap on dequeued ladder paths for CLI searches
pub const DEFAULT_MAX_EXPANSIONS: usize = 200_000;

/// Default dictionary file name
pub const DEFAULT_DICTIONARY: &str = "words.txt";

/// Top-level pathfind configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathfindConfig {
    /// Shortest-path settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Word ladder settings
    #[serde(default)]
    pub ladder: LadderConfig,
}

/// Configuration for the shortest-path command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Source vertex used when `--source` is not given
    #[serde(default)]
    pub source: usize,
}

/// Configuration for the word ladder commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Dictionary file used when `--dictionary` is not given
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    /// Maximum number of paths dequeued before the search gives up
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,

    /// Reject searches whose end word is missing from the dictionary
    #[serde(default = "default_require_end")]
    pub require_end_in_dictionary: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            max_expansions: default_max_expansions(),
            require_end_in_dictionary: default_require_end(),
        }
    }
}

fn default_dictionary() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY)
}

fn default_max_expansions() -> usize {
    DEFAULT_MAX_EXPANSIONS
}

fn default_require_end() -> bool {
    true
}
