//! `pathfind verify` command
//!
//! Runs the word ladder regression scenarios against a dictionary. The
//! expected lengths assume a full English word list.
use std::path::Path;

use pathfind_core::error::{PathfindError, Result};
use pathfind_core::format::join_spaced;
use pathfind_core::ladder::{find_ladder, Dictionary};
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};

/// (start, end, expected ladder length)
const SCENARIOS: &[(&str, &str, usize)] = &[
    ("cat", "dog", 4),
    ("marty", "curls", 6),
    ("code", "data", 6),
    ("work", "play", 6),
    ("sleep", "awake", 8),
    ("car", "cheat", 4),
];

#[derive(Debug, Serialize)]
struct ScenarioResult {
    start: &'static str,
    end: &'static str,
    expected: usize,
    actual: usize,
    passed: bool,
    ladder: Vec<String>,
}

/// Execute the verify command
pub fn execute(cli: &Cli, dictionary_path: &Path) -> Result<()> {
    let dictionary = Dictionary::load(dictionary_path)?;

    let results: Vec<ScenarioResult> = SCENARIOS
        .iter()
        .map(|&(start, end, expected)| {
            let ladder = find_ladder(start, end, &dictionary);
            tracing::debug!(start, end, length = ladder.len(), "verify_scenario");
            ScenarioResult {
                start,
                end,
                expected,
                actual: ladder.len(),
                passed: ladder.len() == expected,
                ladder,
            }
        })
        .collect();

    let failed = results.iter().filter(|r| !r.passed).count();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "dictionary_size": dictionary.len(),
                "passed": results.len() - failed,
                "failed": failed,
                "scenarios": results,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Testing word ladder generator...");
            }
            for result in &results {
                println!(
                    "{} -> {}: {} (expected {}, got {})",
                    result.start,
                    result.end,
                    if result.passed { "PASSED" } else { "FAILED" },
                    result.expected,
                    result.actual
                );
                if !result.passed && !cli.quiet {
                    if result.ladder.is_empty() {
                        println!("  No word ladder found.");
                    } else {
                        println!("  Word ladder found: {}", join_spaced(&result.ladder));
                    }
                }
            }
        }
    }

    if failed > 0 {
        return Err(PathfindError::Other(format!(
            "{} of {} ladder scenarios failed",
            failed,
            results.len()
        )));
    }

    Ok(())
}
