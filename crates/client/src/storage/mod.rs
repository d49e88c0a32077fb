//! Local device storage backends.
//!
//! Storage is a flat, string-keyed, string-valued namespace, mirroring the
//! web storage surface the client apps persist into. Backends are synchronous
//! from the caller's point of view; no operation suspends.
//!
//! Two backends ship here:
//!
//! - [`MemoryBackend`] - ephemeral, for tests and private-browsing sessions
//! - [`FileBackend`] - one file per key under an app-owned directory
//!
//! The cart store is generic over [`StorageBackend`], so the presentation
//! layer constructs the store explicitly with whichever backend fits the
//! platform.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use thiserror::Error;

/// Errors raised by a storage backend.
///
/// Callers of the cart store never see these: the store absorbs them and
/// degrades to its safe defaults. They exist so backends can report precisely
/// to the diagnostic sink.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (quota exceeded, access denied, disk error).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend state was poisoned by a panic in another thread.
    #[error("storage backend state poisoned")]
    Poisoned,
}

/// A flat key-value store for device-local state.
///
/// Keys and values are strings. Writes are whole-value overwrites;
/// last-write-wins with no coordination between concurrent owners of the
/// same backing storage.
pub trait StorageBackend: Send + Sync {
    /// Read the value at `key`, or `None` if nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` at `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value at `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the removal fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Enumerate every stored key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be enumerated.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
