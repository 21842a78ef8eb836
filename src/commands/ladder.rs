//! `pathfind ladder` command
use std::time::Instant;

use pathfind_core::config::PathfindConfig;
use pathfind_core::error::{PathfindError, Result};
use pathfind_core::format::join_spaced;
use pathfind_core::ladder::{edit_distance, search_ladder, Dictionary, LadderOptions, LadderOutcome};
use pathfind_core::trace_time;

use crate::cli::{Cli, LadderArgs, OutputFormat};
use crate::commands::dispatch::dictionary_path;

/// Execute the ladder command
pub fn execute(cli: &Cli, config: &PathfindConfig, args: &LadderArgs) -> Result<()> {
    let start = Instant::now();

    if args.start == args.end {
        return Err(PathfindError::SameWord {
            word: args.start.clone(),
        });
    }

    let dictionary = Dictionary::load(dictionary_path(args.dictionary.as_deref(), config))?;
    trace_time!(start, "load_dictionary", words = dictionary.len());

    if config.ladder.require_end_in_dictionary && !dictionary.contains(&args.end) {
        return Err(PathfindError::WordNotFound {
            word: args.end.clone(),
        });
    }

    let opts = LadderOptions {
        max_expansions: Some(args.max_expansions.unwrap_or(config.ladder.max_expansions)),
    };
    let outcome = search_ladder(&args.start, &args.end, &dictionary, &opts);
    trace_time!(start, "search_ladder", found = outcome.is_found());

    match cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(&outcome)?;
            output["start"] = serde_json::json!(args.start);
            output["end"] = serde_json::json!(args.end);
            output["dictionary_size"] = serde_json::json!(dictionary.len());
            output["edit_distance"] = serde_json::json!(edit_distance(&args.start, &args.end));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_outcome(&outcome),
    }

    Ok(())
}

/// Print a ladder outcome in human format
pub fn print_outcome(outcome: &LadderOutcome) {
    match outcome {
        LadderOutcome::Found { ladder } => {
            println!("Word ladder found: {}", join_spaced(ladder));
        }
        LadderOutcome::Truncated { expanded } => {
            println!(
                "No word ladder found (search stopped after {} expansions).",
                expanded
            );
        }
        LadderOutcome::SameWord | LadderOutcome::NotFound => {
            println!("No word ladder found.");
        }
    }
}
