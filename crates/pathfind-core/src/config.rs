//! Configuration for pathfind
//!
//! Looked up in order: explicit path (`--config` / `PATHFIND_CONFIG`),
//! `pathfind.toml` in the working directory, then
//! `<config dir>/pathfind/config.toml`. Missing files fall back to defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{PathfindError, Result};

pub use types::{
    GraphConfig, LadderConfig, PathfindConfig, DEFAULT_DICTIONARY, DEFAULT_MAX_EXPANSIONS,
};

const CONFIG_DIR: &str = "pathfind";
const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "pathfind.toml";

impl PathfindConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathfindError::io_operation("read config", path.display(), e))?;
        let config: PathfindConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve and load configuration.
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(PathfindError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::load(path);
        }

        for candidate in Self::implicit_paths(cwd) {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "load_config");
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn implicit_paths(cwd: &Path) -> Vec<PathBuf> {
        let mut paths = vec![cwd.join(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(CONFIG_DIR).join(CONFIG_FILE));
        }
        paths
    }

    fn validate(&self) -> Result<()> {
        if self.ladder.max_expansions == 0 {
            bail_invalid!("ladder.max_expansions", 0);
        }
        Ok(())
    }
}
