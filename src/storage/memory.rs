//! In-memory storage implementation for testing and caching.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::Result;
use crate::storage::traits::{Storage, StorageError};

/// An in-memory storage implementation.
///
/// Useful for tests and for keeping a prebuilt index around within a single
/// process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, Box<[u8]>>>,
}

impl MemoryStorage {
    /// Create a new, empty memory storage.
    pub fn new() -> Self {
        MemoryStorage {
            files: Mutex::new(HashMap::new()),
        }
    }

    fn files(&self) -> Result<MutexGuard<'_, HashMap<String, Box<[u8]>>>> {
        self.files
            .lock()
            .map_err(|e| StorageError::IoError(format!("memory storage poisoned: {e}")).into())
    }

    /// Get the number of files stored.
    pub fn file_count(&self) -> usize {
        self.files().map(|files| files.len()).unwrap_or(0)
    }

    /// Get the total size of all files.
    pub fn total_size(&self) -> u64 {
        self.files()
            .map(|files| files.values().map(|data| data.len() as u64).sum())
            .unwrap_or(0)
    }
}

impl Storage for MemoryStorage {
    fn read_all(&self, name: &str) -> Result<Vec<u8>> {
        let files = self.files()?;
        let data = files
            .get(name)
            .ok_or_else(|| StorageError::FileNotFound(name.to_string()))?;
        Ok(data.to_vec())
    }

    fn write_all(&self, name: &str, data: &[u8]) -> Result<()> {
        self.files()?.insert(name.to_string(), data.into());
        Ok(())
    }

    fn file_exists(&self, name: &str) -> bool {
        self.files()
            .map(|files| files.contains_key(name))
            .unwrap_or(false)
    }

    fn delete_file(&self, name: &str) -> Result<()> {
        self.files()?.remove(name);
        Ok(())
    }

    fn list_files(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.files()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
