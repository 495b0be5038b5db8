//! Storage abstraction trait and common types.

use std::fmt;

use crate::error::{CorrigeError, Result};

/// A trait for storage backends that hold named binary blobs.
///
/// Persisted phonetic indexes go through this interface, so callers decide
/// whether they live on disk or in memory.
pub trait Storage: Send + Sync + fmt::Debug {
    /// Read a whole file.
    fn read_all(&self, name: &str) -> Result<Vec<u8>>;

    /// Create or replace a file with the given contents.
    fn write_all(&self, name: &str, data: &[u8]) -> Result<()>;

    /// Check if a file exists.
    fn file_exists(&self, name: &str) -> bool;

    /// Delete a file.
    fn delete_file(&self, name: &str) -> Result<()>;

    /// List all files in the storage, sorted by name.
    fn list_files(&self) -> Result<Vec<String>>;
}

/// Storage-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// File not found.
    FileNotFound(String),

    /// I/O error.
    IoError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FileNotFound(name) => write!(f, "File not found: {name}"),
            StorageError::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for CorrigeError {
    fn from(err: StorageError) -> Self {
        CorrigeError::storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_conversion() {
        let err: CorrigeError = StorageError::FileNotFound("soundex.idx".to_string()).into();
        assert_eq!(err.to_string(), "Storage error: File not found: soundex.idx");

        let err: CorrigeError = StorageError::IoError("disk full".to_string()).into();
        assert!(matches!(err, CorrigeError::Storage(_)));
    }
}
