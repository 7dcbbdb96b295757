#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

use ticklist::{CheckboxPlugin, Config, StateRecord, StateStorage};
use ticklist_traits::{InMemoryCheckbox, InMemoryStorage, RecordingNotifier};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Prefix used by every in-memory scenario.
pub const TEST_PREFIX: &str = "test-";

pub type MemoryPlugin<'a> =
    CheckboxPlugin<&'a InMemoryStorage, &'a RecordingNotifier, InMemoryCheckbox>;

/// Storage and notifier that outlive the plugins created from them, so a
/// test can simulate page loads by building a fresh plugin over the same
/// storage.
#[derive(Debug, Default)]
pub struct Session {
    pub storage: InMemoryStorage,
    pub notifier: RecordingNotifier,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plugin(&self) -> MemoryPlugin<'_> {
        self.plugin_with(Config::default())
    }

    pub fn plugin_with(&self, config: Config) -> MemoryPlugin<'_> {
        CheckboxPlugin::new(
            config.with_storage_prefix(TEST_PREFIX),
            &self.storage,
            &self.notifier,
        )
    }

    /// Parses the stored record for `path` (prefix added).
    pub fn record(&self, path: &str) -> Result<Option<StateRecord>, Box<dyn std::error::Error>> {
        match self.storage.get(&format!("{}{}", TEST_PREFIX, path))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn store_raw(&self, path: &str, raw: &str) -> TestResult {
        self.storage.set(&format!("{}{}", TEST_PREFIX, path), raw)?;
        Ok(())
    }
}
