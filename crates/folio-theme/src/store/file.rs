//! JSON file preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};

/// A preference store backed by a JSON object on disk.
///
/// The file holds string keys mapped to string values:
///
/// ```json
/// { "theme": "dark" }
/// ```
///
/// A missing file reads as empty. Writes go to a sibling temp file which is
/// then renamed over the original, so a crash mid-write never leaves a
/// truncated file behind. Parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| write_err(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A malformed file is replaced rather than blocking every future write.
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StoreError::Malformed { .. }) => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("prefs.json"))
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_value_survives_new_handle() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).set("theme", "light").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"lang": "en"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.set("theme", "dark").unwrap();

        assert_eq!(store.get("lang").unwrap().as_deref(), Some("en"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/prefs.json"));
        store.set("theme", "system").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set("theme", "dark").unwrap();
        assert!(!dir.path().join("prefs.json.tmp").exists());
    }

    #[test]
    fn test_malformed_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("theme"),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2").unwrap();

        let mut store = FileStore::new(&path);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_empty_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "").unwrap();
        assert_eq!(FileStore::new(&path).get("theme").unwrap(), None);
    }
}
