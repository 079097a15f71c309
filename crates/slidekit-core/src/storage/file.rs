//! File-based preference storage for native platforms.

use super::{PreferenceStore, StorageError, StorageResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const PREFERENCES_FILE: &str = "preferences.json";

/// Preferences stored as a single JSON object on disk.
///
/// Every write rewrites the whole file; the store is tiny.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FilePreferences {
    /// Create a store backed by `path`.
    ///
    /// Creates the parent directory if it doesn't exist. The file itself is
    /// created on first write.
    pub fn new(path: PathBuf) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Io(format!("Failed to create preferences directory: {}", e))
                })?;
            }
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Create the store in the default location.
    ///
    /// On Unix: `~/.local/share/slidekit/preferences.json`
    /// On Windows: `%LOCALAPPDATA%\slidekit\preferences.json`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("slidekit").join(PREFERENCES_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&json).map_err(|e| {
            StorageError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn guard(&self) -> StorageResult<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|e| StorageError::Other(format!("Lock error: {}", e)))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.guard()?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.guard()?;
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.guard()?;
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_preferences_set_get() {
        let dir = tempdir().unwrap();
        let store = FilePreferences::new(dir.path().join(PREFERENCES_FILE)).unwrap();

        store.set("carousel_sensitivity", "80").unwrap();

        assert_eq!(store.get("carousel_sensitivity").unwrap().as_deref(), Some("80"));
    }

    #[test]
    fn test_file_preferences_missing_file() {
        let dir = tempdir().unwrap();
        let store = FilePreferences::new(dir.path().join(PREFERENCES_FILE)).unwrap();

        assert_eq!(store.get("carousel_sensitivity").unwrap(), None);
    }

    #[test]
    fn test_file_preferences_persist_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);

        FilePreferences::new(path.clone()).unwrap().set("a", "1").unwrap();
        let reopened = FilePreferences::new(path).unwrap();

        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_file_preferences_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(PREFERENCES_FILE);

        let store = FilePreferences::new(path.clone()).unwrap();
        store.set("a", "1").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_file_preferences_remove() {
        let dir = tempdir().unwrap();
        let store = FilePreferences::new(dir.path().join(PREFERENCES_FILE)).unwrap();

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_preferences_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = FilePreferences::new(path).unwrap();

        assert!(matches!(store.get("a"), Err(StorageError::Serialization(_))));
    }
}
