//! Scoring of proposition lists against expected corrections.
//!
//! An evaluation file holds `"<word>\t<expected>"` lines; a word may appear
//! on several lines, each adding one acceptable correction. Correction output
//! is `"<word>\t<candidate1>\t<candidate2>..."`, one line per word.
//!
//! A proposition list of length `n` whose first acceptable candidate sits at
//! rank `i` scores `sqrt(1 - (i / n)^power)`; a list with no acceptable
//! candidate (rank `n`) scores 0.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CorrigeError, Result};

/// Default exponent of the rank penalty.
pub const DEFAULT_POWER: i32 = 2;

/// Expected corrections per word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSet {
    expected: IndexMap<String, Vec<String>>,
}

impl EvaluationSet {
    pub fn new() -> Self {
        EvaluationSet {
            expected: IndexMap::new(),
        }
    }

    /// Record one acceptable correction for `word`.
    pub fn add(&mut self, word: impl Into<String>, expected: impl Into<String>) {
        self.expected
            .entry(word.into())
            .or_default()
            .push(expected.into());
    }

    /// Acceptable corrections for `word`.
    pub fn expected(&self, word: &str) -> Option<&[String]> {
        self.expected.get(word).map(Vec::as_slice)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    /// Parse `"<word>\t<expected>"` lines. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut set = EvaluationSet::new();

        for (line_num, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            match fields.as_slice() {
                [word, expected] if !word.is_empty() && !expected.is_empty() => {
                    set.add(*word, *expected);
                }
                _ => {
                    return Err(CorrigeError::evaluation(format!(
                        "line {}: expected \"<word>\\t<correction>\", got {line:?}",
                        line_num + 1
                    )));
                }
            }
        }

        Ok(set)
    }

    /// Load an evaluation set from a UTF-8 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

/// Split a correction output line into the word and its candidates.
pub fn parse_correction_line(line: &str) -> Result<(String, Vec<String>)> {
    let mut fields = line.split('\t');
    let word = fields
        .next()
        .filter(|word| !word.is_empty())
        .ok_or_else(|| CorrigeError::evaluation(format!("missing word in line {line:?}")))?;
    let candidates = fields
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .collect();
    Ok((word.to_string(), candidates))
}

/// Format a word and its candidates as a correction output line.
pub fn format_correction_line(word: &str, candidates: &[String]) -> String {
    let mut line = String::from(word);
    for candidate in candidates {
        line.push('\t');
        line.push_str(candidate);
    }
    line
}

/// Score one proposition list.
pub fn proposition_score(candidates: &[String], expected: &[String], power: i32) -> f64 {
    let n = candidates.len();
    if n == 0 {
        return 0.0;
    }

    let rank = candidates
        .iter()
        .position(|candidate| expected.contains(candidate))
        .unwrap_or(n);

    let penalty = (rank as f64 / n as f64).powi(power);
    (1.0 - penalty).max(0.0).sqrt()
}

/// Per-word scores and their mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub scores: Vec<(String, f64)>,
    pub mean: f64,
}

impl EvaluationReport {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Score correction output lines against an evaluation set.
///
/// Every scored word must be present in the set.
pub fn evaluate<I, S>(lines: I, set: &EvaluationSet, power: i32) -> Result<EvaluationReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scores = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let (word, candidates) = parse_correction_line(line)?;
        let expected = set.expected(&word).ok_or_else(|| {
            CorrigeError::evaluation(format!("word {word:?} is not in the evaluation set"))
        })?;
        let score = proposition_score(&candidates, expected, power);
        scores.push((word, score));
    }

    let mean = if scores.is_empty() {
        0.0
    } else {
        scores.iter().map(|(_, s)| s).sum::<f64>() / scores.len() as f64
    };

    Ok(EvaluationReport { scores, mean })
}
