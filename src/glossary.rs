//! Reference glossary of correctly spelled words.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::{Deserialize, Serialize};

use crate::error::{CorrigeError, Result};

/// Words and their frequencies, iterated in order of definition.
///
/// Iteration order matters: selectors break distance ties by the position a
/// word was first inserted at. Words are stored verbatim; callers normalize
/// case before building the glossary if they want case-insensitive matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    words: IndexMap<String, u64>,
}

impl Glossary {
    /// Create a new empty glossary.
    pub fn new() -> Self {
        Glossary {
            words: IndexMap::new(),
        }
    }

    /// Add a word with the given frequency.
    ///
    /// Re-inserting a word keeps its original position and replaces its
    /// frequency.
    pub fn insert(&mut self, word: impl Into<String>, frequency: u64) {
        self.words.insert(word.into(), frequency);
    }

    /// Check if a word exists in the glossary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Get the frequency of a word, if present.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over words in definition order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Iterate over `(word, frequency)` pairs in definition order.
    pub fn iter(&self) -> Iter<'_, String, u64> {
        self.words.iter()
    }

    /// Sum of all frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.words.values().sum()
    }

    /// Parse a glossary from text with one `"<frequency> <word>"` entry per line.
    ///
    /// Blank lines are skipped. Any malformed line fails the whole load, so a
    /// caller never sees a partially-loaded glossary.
    pub fn parse(text: &str) -> Result<Self> {
        let mut glossary = Glossary::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut parts = line.split(' ');
            let (frequency, word) = match (parts.next(), parts.next(), parts.next()) {
                (Some(frequency), Some(word), None) if !word.is_empty() => (frequency, word),
                _ => {
                    return Err(CorrigeError::glossary(format!(
                        "line {}: expected \"<frequency> <word>\", got {line:?}",
                        line_num + 1
                    )));
                }
            };

            let frequency = frequency.parse::<u64>().map_err(|e| {
                CorrigeError::glossary(format!(
                    "line {}: invalid frequency {frequency:?}: {e}",
                    line_num + 1
                ))
            })?;

            glossary.insert(word, frequency);
        }

        Ok(glossary)
    }

    /// Load a glossary from a UTF-8 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let glossary = Self::parse(&text)?;
        log::debug!(
            "loaded glossary {} ({} words)",
            path.display(),
            glossary.len()
        );
        Ok(glossary)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Glossary {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut glossary = Glossary::new();
        for (word, frequency) in iter {
            glossary.insert(word, frequency);
        }
        glossary
    }
}

impl<'a> IntoIterator for &'a Glossary {
    type Item = (&'a String, &'a u64);
    type IntoIter = Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
