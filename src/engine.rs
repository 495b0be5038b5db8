//! Proposition engine: turns a word missing from the glossary into an
//! ordered list of likely corrections.
//!
//! # Example
//!
//! ```
//! use corrige::distance::DistanceMetric;
//! use corrige::engine::{EngineConfig, PropositionEngine};
//! use corrige::glossary::Glossary;
//!
//! # fn main() -> corrige::error::Result<()> {
//! let glossary = Glossary::parse("100 the\n50 that\n50 this\n")?;
//! let config = EngineConfig::new(DistanceMetric::Levenshtein).with_max_proposition(2);
//! let engine = PropositionEngine::new(glossary, config)?;
//!
//! assert_eq!(engine.propose_one("the"), vec!["the"]);
//! assert_eq!(engine.propose_one("thes"), vec!["the", "this"]);
//! # Ok(())
//! # }
//! ```

pub mod config;

use indexmap::IndexMap;

use crate::error::{CorrigeError, Result};
use crate::glossary::Glossary;
use crate::soundex_index::SoundexIndex;
use crate::storage::Storage;

pub use config::{DEFAULT_INDEX_NAME, DEFAULT_MAX_PROPOSITION, EngineConfig, SoundexIndexSource};

/// Propositions for a batch of words, keyed by word.
pub type PropositionMap = IndexMap<String, Vec<String>>;

/// Ranks glossary words against queries using the configured metric and
/// selection method.
#[derive(Debug, Clone)]
pub struct PropositionEngine {
    glossary: Glossary,
    config: EngineConfig,
    soundex_index: Option<SoundexIndex>,
}

impl PropositionEngine {
    /// Create an engine. A Soundex index, if the metric needs one, is built
    /// from the glossary; loading a persisted index requires
    /// [`PropositionEngine::with_storage`].
    pub fn new(glossary: Glossary, config: EngineConfig) -> Result<Self> {
        Self::open(glossary, config, None)
    }

    /// Create an engine that loads or saves its Soundex index through
    /// `storage`, according to [`EngineConfig::soundex_index`].
    pub fn with_storage(
        glossary: Glossary,
        config: EngineConfig,
        storage: &dyn Storage,
    ) -> Result<Self> {
        Self::open(glossary, config, Some(storage))
    }

    /// Create an engine around an index that is already in memory.
    ///
    /// The index must have been built from `glossary`: Soundex propositions
    /// come from the index alone, so words it lacks are never proposed and
    /// words the glossary lacks may be. Only the word counts are compared,
    /// and a mismatch is logged, not rejected.
    pub fn with_soundex_index(
        glossary: Glossary,
        config: EngineConfig,
        index: SoundexIndex,
    ) -> Result<Self> {
        config.validate()?;
        let soundex_index = config.metric.uses_soundex_index().then_some(index);
        if let Some(index) = &soundex_index
            && index.word_count() != glossary.len()
        {
            log::warn!(
                "soundex index holds {} words, glossary holds {}",
                index.word_count(),
                glossary.len()
            );
        }
        Ok(PropositionEngine {
            glossary,
            config,
            soundex_index,
        })
    }

    fn open(glossary: Glossary, config: EngineConfig, storage: Option<&dyn Storage>) -> Result<Self> {
        config.validate()?;

        let soundex_index = if config.metric.uses_soundex_index() {
            Some(Self::prepare_index(&glossary, &config.soundex_index, storage)?)
        } else {
            None
        };

        Ok(PropositionEngine {
            glossary,
            config,
            soundex_index,
        })
    }

    fn prepare_index(
        glossary: &Glossary,
        source: &SoundexIndexSource,
        storage: Option<&dyn Storage>,
    ) -> Result<SoundexIndex> {
        match source {
            SoundexIndexSource::Build => Ok(SoundexIndex::build(glossary)),
            SoundexIndexSource::Load { name } => {
                let storage = storage.ok_or_else(|| {
                    CorrigeError::invalid_config(format!(
                        "loading soundex index {name} requires a storage backend"
                    ))
                })?;
                SoundexIndex::load(storage, name)
            }
            SoundexIndexSource::LoadOrBuild { name } => {
                let Some(storage) = storage else {
                    return Ok(SoundexIndex::build(glossary));
                };
                match SoundexIndex::load(storage, name) {
                    Ok(index) => Ok(index),
                    Err(e) => {
                        log::warn!("could not load soundex index {name} ({e}), rebuilding");
                        let index = SoundexIndex::build(glossary);
                        index.save(storage, name)?;
                        Ok(index)
                    }
                }
            }
        }
    }

    /// Propositions for a single word, closest first.
    ///
    /// A word already in the glossary is returned alone, without evaluating
    /// any distance.
    pub fn propose_one(&self, word: &str) -> Vec<String> {
        if self.glossary.contains(word) {
            log::debug!("{word:?}: exact glossary match");
            return vec![word.to_string()];
        }

        let k = self.config.max_proposition;
        if let Some(index) = &self.soundex_index {
            log::debug!("{word:?}: soundex index lookup");
            return index.propose(word, k);
        }

        log::debug!(
            "{word:?}: scanning {} words with {} / {}",
            self.glossary.len(),
            self.config.metric.name(),
            self.config.selection.name()
        );
        self.config
            .selection
            .select(word, &self.glossary, &self.config.metric, k)
    }

    /// Propositions for many words, keyed by word.
    ///
    /// Repeated input words collapse into a single entry, so neither the
    /// number of occurrences nor their positions survive. Entries follow the
    /// first occurrence of each word.
    pub fn propose_batch<I, S>(&self, words: I) -> PropositionMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut propositions = PropositionMap::new();
        for word in words {
            let word = word.as_ref();
            let props = self.propose_one(word);
            propositions.insert(word.to_string(), props);
        }
        propositions
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The Soundex index, present only for the plain Soundex metric.
    pub fn soundex_index(&self) -> Option<&SoundexIndex> {
        self.soundex_index.as_ref()
    }
}
