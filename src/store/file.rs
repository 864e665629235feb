//! File-backed store: one file per key inside a directory.

use super::KeyValueStore;
use super::error::StoreError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a sibling temp file, then renames it over the old value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    // Reading a key that was never written returns None.
    fn test_get_missing_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("likes").unwrap(), None);
    }

    #[test]
    // A value written by one store instance is visible to a fresh one.
    fn test_value_survives_new_instance() {
        let dir = tempdir().unwrap();
        FileStore::new(dir.path()).set("likes", "[]").unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("likes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    // Writing should create the store directory if it doesn't exist.
    fn test_set_creates_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nonexistent_dir").join("store");
        let store = FileStore::new(&nested);

        store.set("likes", "[]").unwrap();
        assert!(nested.join("likes.json").exists());
        assert!(!nested.join("likes.json.tmp").exists());
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("likes", "first").unwrap();
        store.set("likes", "second").unwrap();
        assert_eq!(store.get("likes").unwrap().as_deref(), Some("second"));
    }
}
