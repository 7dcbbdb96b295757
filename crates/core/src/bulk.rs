//! Whole-store operations: clear, export and import.

use crate::error::CheckboxError;
use crate::store::StateStore;
use std::collections::BTreeMap;
use ticklist_traits::StateStorage;
use ticklist_types::StateRecord;

/// Exported state: scope key to record.
pub type StateExport = BTreeMap<String, StateRecord>;

impl<S: StateStorage> StateStore<S> {
    /// Deletes every key under `prefix` (the configured prefix when `None` or
    /// empty). Returns how many keys were removed.
    pub fn clear_all(&self, prefix: Option<&str>) -> usize {
        let prefix = match prefix {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => self.prefix().to_string(),
        };
        let mut removed = 0;
        for key in self.list_scope_keys(&prefix) {
            match self.storage().remove(&key) {
                Ok(()) => removed += 1,
                Err(e) => log::warn!("Failed to remove checkbox states '{}': {}", key, e),
            }
        }
        log::info!("Cleared {} checkbox state record(s) under '{}'", removed, prefix);
        removed
    }

    /// Reads every record under the configured prefix. Entries that do not
    /// parse are skipped.
    pub fn export_all(&self) -> StateExport {
        let mut export = StateExport::new();
        for key in self.list_scope_keys(self.prefix()) {
            match self.try_load(&key) {
                Ok(record) => {
                    export.insert(key, record);
                }
                Err(e) => log::warn!("Skipping unreadable checkbox states '{}': {}", key, e),
            }
        }
        export
    }

    /// Writes every entry of `data` under its own key. Stops at the first
    /// failure and returns `false`; entries already written stay written.
    pub fn import_all(&self, data: &StateExport) -> bool {
        match self.try_import(data) {
            Ok(count) => {
                log::info!("Imported {} checkbox state record(s)", count);
                true
            }
            Err(e) => {
                log::warn!("Failed to import checkbox states: {}", e);
                false
            }
        }
    }

    pub fn try_import(&self, data: &StateExport) -> Result<usize, CheckboxError> {
        for (key, record) in data {
            self.try_save(key, record)?;
        }
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticklist_traits::InMemoryStorage;
    use ticklist_types::Identity;

    fn record(entries: &[(&str, bool)]) -> StateRecord {
        entries
            .iter()
            .map(|(id, checked)| (Identity::from(*id), *checked))
            .collect()
    }

    fn seeded() -> StateStore<InMemoryStorage> {
        let store = StateStore::new(InMemoryStorage::new(), "test-");
        store.storage().set("test-/a", r#"{"cb-x-0":true}"#).unwrap();
        store.storage().set("test-/b", r#"{"cb-y-0":false}"#).unwrap();
        store.storage().set("other-/a", r#"{"cb-z-0":true}"#).unwrap();
        store
    }

    #[test]
    fn test_clear_all_default_prefix() {
        let store = seeded();
        assert_eq!(store.clear_all(None), 2);
        assert_eq!(store.storage().keys().unwrap(), vec!["other-/a"]);
    }

    #[test]
    fn test_clear_all_override_prefix() {
        let store = seeded();
        assert_eq!(store.clear_all(Some("other-")), 1);
        assert_eq!(store.storage().len(), 2);
    }

    #[test]
    fn test_clear_all_empty_prefix_uses_configured() {
        let store = seeded();
        assert_eq!(store.clear_all(Some("")), 2);
        assert!(store.storage().get("other-/a").unwrap().is_some());
    }

    #[test]
    fn test_export_all() {
        let store = seeded();
        let export = store.export_all();
        assert_eq!(export.len(), 2);
        assert_eq!(export["test-/a"], record(&[("cb-x-0", true)]));
        assert_eq!(export["test-/b"], record(&[("cb-y-0", false)]));
    }

    #[test]
    fn test_export_skips_corrupt_entries() {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = seeded();
        store.storage().set("test-/broken", "not json").unwrap();
        let export = store.export_all();
        assert_eq!(export.len(), 2);
        assert!(!export.contains_key("test-/broken"));
    }

    #[test]
    fn test_import_writes_verbatim() {
        let store = StateStore::new(InMemoryStorage::new(), "test-");
        let mut data = StateExport::new();
        data.insert("test-/a".to_string(), record(&[("cb-x-0", true)]));
        data.insert("elsewhere".to_string(), record(&[]));

        assert!(store.import_all(&data));
        assert_eq!(
            store.storage().get("test-/a").unwrap().as_deref(),
            Some(r#"{"cb-x-0":true}"#)
        );
        assert_eq!(store.storage().get("elsewhere").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_import_failure_reports_false() {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = StateStore::new(InMemoryStorage::new(), "test-");
        store.storage().reject_writes(true);
        let mut data = StateExport::new();
        data.insert("test-/a".to_string(), record(&[("cb-x-0", true)]));

        assert!(!store.import_all(&data));
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_import_stops_at_first_failure_without_rollback() {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = StateStore::new(InMemoryStorage::new(), "test-");
        store.storage().reject_writes_after(1);
        let mut data = StateExport::new();
        data.insert("test-/a".to_string(), record(&[("cb-a-0", true)]));
        data.insert("test-/b".to_string(), record(&[("cb-b-0", true)]));
        data.insert("test-/c".to_string(), record(&[("cb-c-0", false)]));

        assert!(!store.import_all(&data));
        // Entries are written in key order; the first one stays
        assert_eq!(
            store.storage().get("test-/a").unwrap().as_deref(),
            Some(r#"{"cb-a-0":true}"#)
        );
        assert_eq!(store.storage().get("test-/b").unwrap(), None);
        assert_eq!(store.storage().get("test-/c").unwrap(), None);
    }

    #[test]
    fn test_export_import_between_stores() {
        let source = seeded();
        let target = StateStore::new(InMemoryStorage::new(), "test-");
        assert!(target.import_all(&source.export_all()));
        assert_eq!(target.export_all(), source.export_all());
    }
}
