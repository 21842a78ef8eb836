use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{PathfindError, Result};

/// A set of lowercase words, iterated in lexicographic order.
///
/// The sorted order is the traversal order of the ladder search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary, lowercasing each word
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Parse whitespace-separated words
    pub fn parse(input: &str) -> Self {
        Self::from_words(input.split_whitespace())
    }

    /// Load a dictionary file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PathfindError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)
            .map_err(|e| PathfindError::io_operation("read dictionary", path.display(), e))?;
        let dictionary = Self::parse(&content);
        tracing::debug!(path = %path.display(), words = dictionary.len(), "load_dictionary");
        Ok(dictionary)
    }

    /// Insert a word, lowercased. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
