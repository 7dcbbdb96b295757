//! Adapter between state records and the raw key-value storage.
//!
//! Every record is stored whole, as a JSON object, under its [`ScopeKey`].
//! Reads and writes never fail outward: a missing or corrupt value loads as
//! an empty record and a failed write leaves the previous value in place.
//! Both cases are logged.

use crate::error::CheckboxError;
use ticklist_traits::StateStorage;
use ticklist_types::{ScopeKey, StateRecord};

#[derive(Debug)]
pub struct StateStore<S> {
    storage: S,
    prefix: String,
}

impl<S: StateStorage> StateStore<S> {
    pub fn new(storage: S, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }

    /// The configured key prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The scope key for a navigation path.
    pub fn scope_key(&self, path: &str) -> ScopeKey {
        ScopeKey::new(&self.prefix, path)
    }

    /// Loads the record for `scope`, or an empty one if it cannot be read.
    pub fn load(&self, scope: &ScopeKey) -> StateRecord {
        self.try_load(scope.as_str()).unwrap_or_else(|e| {
            log::warn!("Failed to load checkbox states from '{}': {}", scope, e);
            StateRecord::new()
        })
    }

    pub fn try_load(&self, key: &str) -> Result<StateRecord, CheckboxError> {
        match self.storage.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(StateRecord::new()),
        }
    }

    /// Saves `record` under `scope`. Failures are logged and otherwise ignored.
    pub fn save(&self, scope: &ScopeKey, record: &StateRecord) {
        if let Err(e) = self.try_save(scope.as_str(), record) {
            log::warn!("Failed to save checkbox states to '{}': {}", scope, e);
        }
    }

    pub fn try_save(&self, key: &str, record: &StateRecord) -> Result<(), CheckboxError> {
        let raw = serde_json::to_string(record)?;
        self.storage.set(key, &raw)?;
        Ok(())
    }

    /// All storage keys starting with `prefix`, sorted.
    pub fn list_scope_keys(&self, prefix: &str) -> Vec<String> {
        match self.storage.keys() {
            Ok(keys) => {
                let mut keys: Vec<String> =
                    keys.into_iter().filter(|k| k.starts_with(prefix)).collect();
                keys.sort();
                keys
            }
            Err(e) => {
                log::warn!(
                    "Failed to enumerate keys in {}: {}",
                    self.storage.name(),
                    e
                );
                Vec::new()
            }
        }
    }
}
