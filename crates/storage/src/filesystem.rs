//! Filesystem-backed state storage for native platforms.
//!
//! All keys of one store live in a single JSON object file inside the store
//! directory. Reads always go to disk, so several handles or processes
//! sharing a directory see each other's writes.
//!
//! Every write is a read-modify-write of the whole file. Writers hold an
//! exclusive advisory lock on [`LOCK_FILE_NAME`] from the read until the new
//! file has been renamed into place, so a write to one key never drops a
//! concurrent write to another. Readers take no lock: the rename swaps the
//! file atomically, so they see either the old or the new contents.

use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use ticklist_traits::{StateStorage, StorageError};

/// Name of the data file inside the store directory.
pub const STORE_FILE_NAME: &str = "checkbox-state.json";

/// Name of the lock file writers coordinate on.
pub const LOCK_FILE_NAME: &str = "checkbox-state.lock";

type Entries = BTreeMap<String, String>;

/// A storage backend persisting to a JSON file.
#[derive(Debug)]
pub struct FilesystemStorage {
    dir: PathBuf,
    file: PathBuf,
}

impl FilesystemStorage {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let file = dir.join(STORE_FILE_NAME);
        Self { dir, file }
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the data file path.
    pub fn file(&self) -> &Path {
        &self.file
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let raw = match fs::read_to_string(&self.file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|e| {
            StorageError::Io(format!("corrupt store file '{}': {}", self.file.display(), e))
        })
    }

    /// Blocks until this handle holds the writer lock. Dropping the returned
    /// file releases it.
    fn lock_writers(&self) -> io::Result<File> {
        fs::create_dir_all(&self.dir)?;
        let lock = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(self.dir.join(LOCK_FILE_NAME))?;
        FileExt::lock_exclusive(&lock)?;
        Ok(lock)
    }

    fn write_entries(&self, key: &str, entries: &Entries) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        // Same directory as the target so the rename stays on one filesystem
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(raw.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.file).map_err(|e| e.error)?;
        Ok(())
    }

    fn update(&self, key: &str, f: impl FnOnce(&mut Entries)) -> Result<(), StorageError> {
        let write_failed = |message: String| StorageError::WriteFailed {
            key: key.to_string(),
            message,
        };
        let lock = self
            .lock_writers()
            .map_err(|e| write_failed(format!("cannot lock store: {}", e)))?;

        let mut entries = self
            .read_entries()
            .map_err(|e| write_failed(e.to_string()))?;
        f(&mut entries);
        let written = self.write_entries(key, &entries);

        if let Err(e) = FileExt::unlock(&lock) {
            log::warn!("Failed to release store lock in {}: {}", self.dir.display(), e);
        }
        written
    }
}

impl StateStorage for FilesystemStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if !self.file.exists() {
            return Ok(());
        }
        self.update(key, |entries| {
            entries.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read_entries()?.into_keys().collect())
    }

    fn name(&self) -> &'static str {
        "FilesystemStorage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FilesystemStorage::new(dir.path().join("nested"));
        assert_eq!(storage.get("k").unwrap(), None);
        assert!(storage.keys().unwrap().is_empty());
        assert!(storage.remove("k").is_ok());
        assert!(!storage.file().exists());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let storage = FilesystemStorage::new(dir.path().join("store"));

        storage.set("docsify-checkbox-/a", r#"{"cb-x-0":true}"#).unwrap();
        storage.set("docsify-checkbox-/b", "{}").unwrap();
        assert_eq!(
            storage.get("docsify-checkbox-/a").unwrap().as_deref(),
            Some(r#"{"cb-x-0":true}"#)
        );
        assert_eq!(
            storage.keys().unwrap(),
            vec!["docsify-checkbox-/a", "docsify-checkbox-/b"]
        );

        storage.remove("docsify-checkbox-/a").unwrap();
        assert_eq!(storage.get("docsify-checkbox-/a").unwrap(), None);

        // Only the data file and the lock file are left behind
        let mut names: Vec<_> = fs::read_dir(dir.path().join("store"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec![STORE_FILE_NAME, LOCK_FILE_NAME]);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = TempDir::new().unwrap();
        FilesystemStorage::new(dir.path()).set("k", "v").unwrap();
        let reopened = FilesystemStorage::new(dir.path());
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_sees_writes_from_other_handles() {
        let dir = TempDir::new().unwrap();
        let a = FilesystemStorage::new(dir.path());
        let b = FilesystemStorage::new(dir.path());
        a.set("one", "1").unwrap();
        b.set("two", "2").unwrap();
        assert_eq!(a.keys().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_concurrent_writers_keep_every_key() {
        let dir = TempDir::new().unwrap();
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let path = dir.path().to_path_buf();
                std::thread::spawn(move || {
                    let storage = FilesystemStorage::new(path);
                    for i in 0..50 {
                        storage.set(&format!("k-{}-{}", t, i), "{}").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let keys = FilesystemStorage::new(dir.path()).keys().unwrap();
        assert_eq!(keys.len(), 200);
        assert!(keys.contains(&"k-0-0".to_string()));
        assert!(keys.contains(&"k-3-49".to_string()));
    }

    #[test]
    fn test_concurrent_set_and_remove() {
        let dir = TempDir::new().unwrap();
        let seeded = FilesystemStorage::new(dir.path());
        for i in 0..50 {
            seeded.set(&format!("old-{}", i), "{}").unwrap();
        }

        let remover = {
            let path = dir.path().to_path_buf();
            std::thread::spawn(move || {
                let storage = FilesystemStorage::new(path);
                for i in 0..50 {
                    storage.remove(&format!("old-{}", i)).unwrap();
                }
            })
        };
        let writer = {
            let path = dir.path().to_path_buf();
            std::thread::spawn(move || {
                let storage = FilesystemStorage::new(path);
                for i in 0..50 {
                    storage.set(&format!("new-{}", i), "{}").unwrap();
                }
            })
        };
        remover.join().unwrap();
        writer.join().unwrap();

        let keys = seeded.keys().unwrap();
        assert_eq!(keys.len(), 50);
        assert!(keys.iter().all(|k| k.starts_with("new-")));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let storage = FilesystemStorage::new(dir.path());
        fs::write(storage.file(), "[not an object").unwrap();

        assert!(matches!(storage.get("k"), Err(StorageError::Io(_))));
        assert!(matches!(
            storage.set("k", "v"),
            Err(StorageError::WriteFailed { .. })
        ));
        // The unreadable file is left for inspection
        assert_eq!(fs::read_to_string(storage.file()).unwrap(), "[not an object");
    }

    #[test]
    fn test_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(FilesystemStorage::new(dir.path()).name(), "FilesystemStorage");
    }
}
