//! Command dispatch logic for pathfind
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = PathfindConfig::resolve(cli.config.as_deref(), &cwd)?;

    tracing::debug!(elapsed = ?start.elapsed(), "resolve_config");

    match &cli.command {
        Commands::Dijkstra(args) => commands::dijkstra::execute(cli, &config, args),
        Commands::Ladder(args) => commands::ladder::execute(cli, &config, args),
        Commands::Verify { dictionary } => {
            let path = dictionary_path(dictionary.as_deref(), &config);
            commands::verify::execute(cli, path)
        }
    }
}

/// Dictionary file from the command line, falling back to config
pub(crate) fn dictionary_path<'a>(flag: Option<&'a Path>, config: &'a PathfindConfig) -> &'a Path {
    flag.unwrap_or(config.ladder.dictionary.as_path())
}
