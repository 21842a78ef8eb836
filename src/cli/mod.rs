//! CLI argument parsing for pathfind
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_format, parse_word};
pub use pathfind_core::format::OutputFormat;

/// Pathfind - shortest paths and word ladders
#[derive(Parser, Debug)]
#[command(name = "pathfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file
    #[arg(long, global = true, env = "PATHFIND_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest paths from a source vertex (Dijkstra)
    Dijkstra(DijkstraArgs),

    /// Shortest word ladder between two words
    Ladder(LadderArgs),

    /// Run the built-in word ladder regression scenarios
    Verify {
        /// Dictionary file (whitespace-separated words)
        #[arg(long, short)]
        dictionary: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DijkstraArgs {
    /// Graph file: vertex count followed by `src dst weight` triples
    pub graph: PathBuf,

    /// Source vertex (defaults to graph.source from config, else 0)
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Only report the path to this vertex
    #[arg(long)]
    pub to: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct LadderArgs {
    /// Start word
    #[arg(value_parser = parse_word)]
    pub start: String,

    /// End word (must be in the dictionary unless disabled in config)
    #[arg(value_parser = parse_word)]
    pub end: String,

    /// Dictionary file (whitespace-separated words)
    #[arg(long, short)]
    pub dictionary: Option<PathBuf>,

    /// Give up after expanding this many partial ladders
    #[arg(long)]
    pub max_expansions: Option<usize>,
}
