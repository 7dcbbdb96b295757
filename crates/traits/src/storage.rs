//! StateStorage trait for abstracting the durable key-value store.
//!
//! This trait allows the engine to persist checkbox state without being tied
//! to a particular medium (browser `localStorage`, a file, memory).

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded while writing '{0}'")]
    QuotaExceeded(String),

    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// A string-keyed, string-valued durable mapping.
///
/// Only single-key atomicity is expected. Methods take `&self`; backends use
/// interior mutability where they need it.
///
/// # Implementations
///
/// - `InMemoryStorage`: pre-populated memory (always available)
/// - `FilesystemStorage`: a JSON file on disk (`ticklist-storage`)
/// - `LocalStorage`: the browser's `window.localStorage` (`ticklist-wasm`)
pub trait StateStorage: Debug {
    /// Returns the raw value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Lists every key currently stored.
    fn keys(&self) -> Result<Vec<String>, StorageError>;

    /// Returns a human-readable name for this backend (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<T: StateStorage + ?Sized> StateStorage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).keys()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// An in-memory storage backend.
///
/// Works in any environment. Writes can be made to fail on demand with
/// [`reject_writes`](Self::reject_writes) or
/// [`reject_writes_after`](Self::reject_writes_after), which simulate a full
/// quota.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
    reject_writes: AtomicBool,
    /// Successful `set` calls left before writes are rejected.
    write_budget: Mutex<Option<usize>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `set` fail with `QuotaExceeded` while enabled.
    /// Disabling also drops any budget set by
    /// [`reject_writes_after`](Self::reject_writes_after).
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
        if !reject {
            if let Ok(mut budget) = self.write_budget.lock() {
                *budget = None;
            }
        }
    }

    /// Lets the next `writes` calls to `set` succeed, then rejects the rest
    /// with `QuotaExceeded`.
    pub fn reject_writes_after(&self, writes: usize) {
        if let Ok(mut budget) = self.write_budget.lock() {
            *budget = Some(writes);
        }
    }

    /// Returns the number of stored keys. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable("in-memory store lock poisoned".to_string())
    }
}

impl StateStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::QuotaExceeded(key.to_string()));
        }
        {
            let mut budget = self.write_budget.lock().map_err(|_| Self::poisoned())?;
            match budget.as_mut() {
                Some(0) => return Err(StorageError::QuotaExceeded(key.to_string())),
                Some(left) => *left -= 1,
                None => {}
            }
        }
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.keys().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "InMemoryStorage"
    }
}
