//! Storage abstraction layer for Corrige.
//!
//! Prebuilt phonetic indexes are persisted as named binary blobs through the
//! [`Storage`] trait. File and memory backends can be swapped without
//! touching the engine.
//!
//! # Example
//!
//! ```
//! use corrige::storage::{MemoryStorage, Storage};
//!
//! # fn main() -> corrige::error::Result<()> {
//! let storage = MemoryStorage::new();
//! storage.write_all("blob", b"bytes")?;
//! assert_eq!(storage.read_all("blob")?, b"bytes");
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{Storage, StorageError};
