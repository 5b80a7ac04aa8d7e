//! Key-value storage port backing the task repository.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String-keyed, string-valued storage medium.
///
/// Mirrors browser local storage: each key holds one opaque text blob.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be written.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Deletes the value stored under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be written.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the storage medium.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A lock guarding in-process state was poisoned.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),

    /// I/O failure in the underlying medium.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
