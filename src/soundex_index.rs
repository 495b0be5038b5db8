//! Precomputed Soundex buckets over a glossary.
//!
//! The index maps each [`SoundexCode`] to the glossary words sharing it, in
//! glossary order. It answers phonetic queries without scanning the whole
//! glossary and can be persisted through a [`Storage`] backend so the build
//! cost is paid once across runs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::distance::SoundexCode;
use crate::error::{CorrigeError, Result};
use crate::glossary::Glossary;
use crate::storage::Storage;

/// Leading bytes of a persisted index.
const INDEX_MAGIC: [u8; 4] = *b"CSDX";

/// Format version of a persisted index.
const INDEX_VERSION: u32 = 1;

/// Soundex code to words, insertion order preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundexIndex {
    buckets: IndexMap<SoundexCode, Vec<String>>,
}

/// On-disk layout of a persisted index.
#[derive(Serialize, Deserialize)]
struct PersistedIndex {
    magic: [u8; 4],
    version: u32,
    index: SoundexIndex,
}

impl SoundexIndex {
    /// Build the index from every glossary word.
    pub fn build(glossary: &Glossary) -> Self {
        let mut buckets: IndexMap<SoundexCode, Vec<String>> = IndexMap::new();
        for word in glossary.words() {
            buckets
                .entry(SoundexCode::encode(word))
                .or_default()
                .push(word.to_string());
        }

        let index = SoundexIndex { buckets };
        log::info!(
            "built soundex index: {} codes over {} words",
            index.len(),
            index.word_count()
        );
        index
    }

    /// Words sharing `code`, in glossary order. Empty if the code is unknown.
    pub fn lookup(&self, code: &SoundexCode) -> &[String] {
        self.buckets.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// At most `k` words sharing `code`.
    pub fn lookup_top(&self, code: &SoundexCode, k: usize) -> &[String] {
        let words = self.lookup(code);
        &words[..words.len().min(k)]
    }

    /// At most `k` glossary words that sound like `word`.
    pub fn propose(&self, word: &str, k: usize) -> Vec<String> {
        self.lookup_top(&SoundexCode::encode(word), k).to_vec()
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of indexed words across all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Iterate over `(code, words)` buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&SoundexCode, &[String])> {
        self.buckets
            .iter()
            .map(|(code, words)| (code, words.as_slice()))
    }

    /// Encode the index into a versioned binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let persisted = PersistedIndex {
            magic: INDEX_MAGIC,
            version: INDEX_VERSION,
            index: self.clone(),
        };
        bincode::serialize(&persisted)
            .map_err(|e| CorrigeError::index(format!("Failed to encode soundex index: {e}")))
    }

    /// Decode an index produced by [`SoundexIndex::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let persisted: PersistedIndex = bincode::deserialize(bytes)
            .map_err(|e| CorrigeError::index(format!("Failed to decode soundex index: {e}")))?;

        if persisted.magic != INDEX_MAGIC {
            return Err(CorrigeError::index("Not a soundex index (bad magic)"));
        }
        if persisted.version != INDEX_VERSION {
            return Err(CorrigeError::index(format!(
                "Unsupported soundex index version {} (expected {INDEX_VERSION})",
                persisted.version
            )));
        }

        Ok(persisted.index)
    }

    /// Persist the index under `name`.
    pub fn save(&self, storage: &dyn Storage, name: &str) -> Result<()> {
        storage.write_all(name, &self.to_bytes()?)?;
        log::info!("saved soundex index {name} ({} codes)", self.len());
        Ok(())
    }

    /// Load an index persisted under `name`.
    ///
    /// A missing blob is a storage error and an undecodable one an index
    /// error; neither falls back to rebuilding.
    pub fn load(storage: &dyn Storage, name: &str) -> Result<Self> {
        let bytes = storage.read_all(name)?;
        let index = Self::from_bytes(&bytes)?;
        log::info!(
            "loaded soundex index {name}: {} codes over {} words",
            index.len(),
            index.word_count()
        );
        Ok(index)
    }
}
