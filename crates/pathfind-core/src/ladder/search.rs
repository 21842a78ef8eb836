use crate::ladder::adjacency::is_adjacent;
use crate::ladder::dictionary::Dictionary;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// Limits applied to a ladder search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LadderOptions {
    /// Stop after dequeuing this many partial ladders (`None` = unbounded)
    pub max_expansions: Option<usize>,
}

/// Result of a ladder search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LadderOutcome {
    /// Start and end are the same word; nothing to search
    SameWord,
    /// The frontier emptied without reaching the end word
    NotFound,
    /// A shortest ladder, start word first
    Found { ladder: Vec<String> },
    /// `max_expansions` was reached before the end word
    Truncated { expanded: usize },
}

impl LadderOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LadderOutcome::Found { .. })
    }

    /// Flatten to a word sequence; every non-`Found` outcome is empty
    pub fn into_ladder(self) -> Vec<String> {
        match self {
            LadderOutcome::Found { ladder } => ladder,
            _ => Vec::new(),
        }
    }
}

/// Shortest ladder from `start` to `end`, or empty if there is none or the
/// words are equal.
pub fn find_ladder(start: &str, end: &str, dictionary: &Dictionary) -> Vec<String> {
    search_ladder(start, end, dictionary, &LadderOptions::default()).into_ladder()
}

/// Breadth-first ladder search.
///
/// Each queue entry is a whole partial ladder. Candidate words are scanned
/// in dictionary order and marked visited when first enqueued, so each word
/// lands in at most one queued ladder and the first ladder that reaches
/// `end` is the lexicographically-first shortest one.
///
/// `start` does not need to be in the dictionary; every other word of the
/// result is.
#[tracing::instrument(skip(dictionary), fields(words = dictionary.len(), max_expansions = ?opts.max_expansions))]
pub fn search_ladder(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
    opts: &LadderOptions,
) -> LadderOutcome {
    if start == end {
        return LadderOutcome::SameWord;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    visited.insert(start);
    queue.push_back(vec![start]);

    let mut expanded = 0usize;
    while let Some(ladder) = queue.pop_front() {
        if opts.max_expansions.is_some_and(|max| expanded >= max) {
            tracing::debug!(expanded, queued = queue.len() + 1, "ladder_truncated");
            return LadderOutcome::Truncated { expanded };
        }
        expanded += 1;

        let Some(&last) = ladder.last() else {
            continue;
        };

        for word in dictionary.iter() {
            if visited.contains(word) || !is_adjacent(last, word) {
                continue;
            }
            visited.insert(word);

            let mut next = Vec::with_capacity(ladder.len() + 1);
            next.extend_from_slice(&ladder);
            next.push(word);

            if word == end {
                tracing::debug!(expanded, length = next.len(), "ladder_found");
                return LadderOutcome::Found {
                    ladder: next.into_iter().map(str::to_string).collect(),
                };
            }
            queue.push_back(next);
        }
    }

    tracing::debug!(expanded, visited = visited.len(), "ladder_exhausted");
    LadderOutcome::NotFound
}

#[cfg(test)]
mod tests;
