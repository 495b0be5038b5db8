//! # Corrige
//!
//! Proposes likely-correct spellings for words missing from a reference
//! glossary, ranking glossary words by a configurable string distance.
//!
//! ## Features
//!
//! - Distance metrics: null, Hamming, n-gram Jaccard, Levenshtein, Soundex
//!   (optionally with an inner metric on codes), Jaro and Jaro-Winkler
//! - Exact top-K selection plus two single-pass heuristics
//! - Precomputed Soundex index with pluggable persistence
//! - Evaluation harness scoring propositions against expected corrections

pub mod cli;
pub mod distance;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod glossary;
pub mod selector;
pub mod soundex_index;
pub mod storage;

pub mod prelude {
    pub use crate::distance::{DistanceMetric, SoundexCode};
    pub use crate::engine::{EngineConfig, PropositionEngine, PropositionMap, SoundexIndexSource};
    pub use crate::error::{CorrigeError, Result};
    pub use crate::glossary::Glossary;
    pub use crate::selector::SelectionMethod;
    pub use crate::soundex_index::SoundexIndex;
    pub use crate::storage::{FileStorage, MemoryStorage, Storage};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
