//! String distance metrics used to rank glossary words.
//!
//! Every metric is a pure function of two words returning a non-negative
//! real number, 0 meaning "identical under this metric". Metrics are a closed
//! set selected by configuration through [`DistanceMetric`].
//!
//! # Example
//!
//! ```
//! use corrige::distance::DistanceMetric;
//!
//! assert_eq!(DistanceMetric::Levenshtein.distance("kitten", "sitting"), 3.0);
//! assert_eq!(DistanceMetric::soundex().distance("Robert", "Rupert"), 0.0);
//! ```

pub mod hamming;
pub mod jaro;
pub mod levenshtein;
pub mod ngram;
pub mod soundex;

use serde::{Deserialize, Serialize};

use crate::error::{CorrigeError, Result};

pub use hamming::hamming_distance;
pub use jaro::{jaro_distance, jaro_similarity, jaro_winkler_similarity};
pub use levenshtein::{DpTable, levenshtein_distance};
pub use ngram::{jaccard_distance, ngrams};
pub use soundex::SoundexCode;

/// Default n-gram size.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Distance metrics for word comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Always 0; every glossary word is equally close.
    Null,
    /// Positional mismatches plus length difference.
    Hamming,
    /// Jaccard distance between n-gram sets.
    #[serde(rename = "ngram")]
    NGram { n: usize },
    /// Unit-cost edit distance.
    Levenshtein,
    /// Compare Soundex codes, either for equality (0 or 1) or through an
    /// inner metric applied to the codes.
    Soundex {
        #[serde(default)]
        inner: Option<Box<DistanceMetric>>,
    },
    /// `1 - Jaro` or `1 - Jaro-Winkler` similarity.
    Jaro {
        #[serde(default)]
        winkler: bool,
    },
}

impl Default for DistanceMetric {
    fn default() -> Self {
        DistanceMetric::NGram {
            n: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl DistanceMetric {
    /// Soundex equality metric without an inner metric.
    pub fn soundex() -> Self {
        DistanceMetric::Soundex { inner: None }
    }

    /// Soundex metric delegating code comparison to `inner`.
    pub fn soundex_with(inner: DistanceMetric) -> Self {
        DistanceMetric::Soundex {
            inner: Some(Box::new(inner)),
        }
    }

    /// Calculate the distance between two words using this metric.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        match self {
            DistanceMetric::Null => 0.0,
            DistanceMetric::Hamming => hamming_distance(a, b) as f64,
            DistanceMetric::NGram { n } => jaccard_distance(a, b, *n),
            DistanceMetric::Levenshtein => levenshtein_distance(a, b) as f64,
            DistanceMetric::Soundex { inner } => {
                let code_a = SoundexCode::encode(a);
                let code_b = SoundexCode::encode(b);
                match inner {
                    Some(metric) => metric.distance(code_a.as_str(), code_b.as_str()),
                    None if code_a == code_b => 0.0,
                    None => 1.0,
                }
            }
            DistanceMetric::Jaro { winkler } => jaro_distance(a, b, *winkler),
        }
    }

    /// Whether queries can be answered straight from a Soundex index,
    /// skipping the distance scan.
    pub fn uses_soundex_index(&self) -> bool {
        matches!(self, DistanceMetric::Soundex { inner: None })
    }

    /// Check parameters, including those of a nested inner metric.
    pub fn validate(&self) -> Result<()> {
        match self {
            DistanceMetric::NGram { n: 0 } => Err(CorrigeError::invalid_config(
                "n-gram size must be at least 1",
            )),
            DistanceMetric::Soundex { inner: Some(inner) } => inner.validate(),
            _ => Ok(()),
        }
    }

    /// Get the name of this distance metric.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Null => "null",
            DistanceMetric::Hamming => "hamming",
            DistanceMetric::NGram { .. } => "ngram",
            DistanceMetric::Levenshtein => "levenshtein",
            DistanceMetric::Soundex { .. } => "soundex",
            DistanceMetric::Jaro { winkler: false } => "jaro",
            DistanceMetric::Jaro { winkler: true } => "jaro-winkler",
        }
    }

    /// Parse a distance metric from a string, using default parameters.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "null" | "none" => Ok(DistanceMetric::Null),
            "hamming" => Ok(DistanceMetric::Hamming),
            "ngram" | "n-gram" | "jaccard" => Ok(DistanceMetric::default()),
            "levenshtein" | "edit" => Ok(DistanceMetric::Levenshtein),
            "soundex" => Ok(DistanceMetric::soundex()),
            "jaro" => Ok(DistanceMetric::Jaro { winkler: false }),
            "jaro-winkler" | "jaro_winkler" | "winkler" => Ok(DistanceMetric::Jaro { winkler: true }),
            _ => Err(CorrigeError::invalid_config(format!(
                "Unknown distance metric: {s}"
            ))),
        }
    }
}
