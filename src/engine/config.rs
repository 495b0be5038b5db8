//! Configuration for the proposition engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::error::Result;
use crate::selector::SelectionMethod;

/// Default number of propositions per word.
pub const DEFAULT_MAX_PROPOSITION: usize = 5;

/// Default name of a persisted Soundex index.
pub const DEFAULT_INDEX_NAME: &str = "soundex.idx";

/// Where the Soundex index comes from when the metric needs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SoundexIndexSource {
    /// Build from the glossary at construction.
    #[default]
    Build,
    /// Load a persisted index; a missing or corrupt blob fails construction.
    Load { name: String },
    /// Load a persisted index, rebuilding and saving it if the load fails.
    LoadOrBuild { name: String },
}

/// Configuration for [`PropositionEngine`](crate::engine::PropositionEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distance metric used to rank glossary words.
    pub metric: DistanceMetric,
    /// Ranking policy.
    pub selection: SelectionMethod,
    /// Maximum number of propositions per word.
    pub max_proposition: usize,
    /// Source of the Soundex index, used only by the plain Soundex metric.
    pub soundex_index: SoundexIndexSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            metric: DistanceMetric::default(),
            selection: SelectionMethod::default(),
            max_proposition: DEFAULT_MAX_PROPOSITION,
            soundex_index: SoundexIndexSource::default(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given metric and default settings.
    pub fn new(metric: DistanceMetric) -> Self {
        EngineConfig {
            metric,
            ..Default::default()
        }
    }

    pub fn with_selection(mut self, selection: SelectionMethod) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_max_proposition(mut self, max_proposition: usize) -> Self {
        self.max_proposition = max_proposition;
        self
    }

    pub fn with_soundex_index(mut self, source: SoundexIndexSource) -> Self {
        self.soundex_index = source;
        self
    }

    /// Check the configuration before an engine is built.
    pub fn validate(&self) -> Result<()> {
        self.metric.validate()
    }

    /// Read a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
