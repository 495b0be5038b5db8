//! Error types for the Corrige library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`CorrigeError`] enum. Distance and selection calls are total and never
//! fail; errors come from loading glossaries, evaluation files, persisted
//! indexes and from invalid configuration.
//!
//! # Examples
//!
//! ```
//! use corrige::error::{CorrigeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CorrigeError::invalid_config("n-gram size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Corrige operations.
#[derive(Error, Debug)]
pub enum CorrigeError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed glossary source
    #[error("Glossary error: {0}")]
    Glossary(String),

    /// Malformed evaluation or correction lines
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Corrupt or undecodable phonetic index
    #[error("Index error: {0}")]
    Index(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error with context attached by the command layer
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CorrigeError.
pub type Result<T> = std::result::Result<T, CorrigeError>;

impl CorrigeError {
    /// Create a new glossary error.
    pub fn glossary<S: Into<String>>(msg: S) -> Self {
        CorrigeError::Glossary(msg.into())
    }

    /// Create a new evaluation error.
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        CorrigeError::Evaluation(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        CorrigeError::Storage(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        CorrigeError::Index(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        CorrigeError::Config(msg.into())
    }
}
