use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;

use super::PreferenceStore;

/// Preferences persisted as a flat JSON object of strings.
///
/// The file is read once on open; every `set_item` rewrites it.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            debug!(?path, "No preference file yet");
            return Ok(Self::empty(path));
        }

        let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let items = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, items })
    }

    /// A store that ignores whatever is on disk and overwrites it on first write.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let contents = serde_json::to_string_pretty(&self.items).map_err(|source| {
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        // Write-then-rename so a crash never leaves a half-written file
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp_path).map_err(io_err)?;
        file.write_all(contents.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a unique temp directory for each test.
    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cleanup_store_test_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = test_dir("missing");
        let store = JsonFileStore::open(dir.join("prefs.json")).unwrap();
        assert_eq!(store.get_item("theme").unwrap(), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_set_item_survives_reopen() {
        let dir = test_dir("reopen");
        let path = dir.join("nested").join("prefs.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_item("theme", "dark").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("dark"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_open_corrupt_file_errors() {
        let dir = test_dir("corrupt");
        let path = dir.join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));

        // The empty fallback overwrites the corrupt file on first write
        let mut store = JsonFileStore::empty(&path);
        store.set_item("theme", "light").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("light"));
        let _ = fs::remove_dir_all(&dir);
    }
}
