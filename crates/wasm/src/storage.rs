//! `window.localStorage` as a state storage backend.

use crate::error::js_message;
use ticklist_traits::{StateStorage, StorageError};

/// Storage backed by the browser's `localStorage`.
///
/// When storage is blocked (privacy mode, sandboxed iframe) every call fails
/// with `StorageError::Unavailable`, which the engine treats as "nothing
/// stored" and "write failed".
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is not available; checkbox state will not persist");
        }
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                message: js_message(&e),
            })
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let storage = self.storage()?;
        let length = storage
            .length()
            .map_err(|e| StorageError::Unavailable(js_message(&e)))?;
        let mut keys = Vec::with_capacity(length as usize);
        for index in 0..length {
            if let Ok(Some(key)) = storage.key(index) {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn name(&self) -> &'static str {
        "LocalStorage"
    }
}
