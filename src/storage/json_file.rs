//! JSON-array file storage.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use super::traits::RecordStore;
use crate::error::{Result, TpkitError};

/// Stores a collection as a single pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Create a store backed by the given file. Nothing is touched on disk.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> RecordStore<T> for JsonFileStore<T> {
    fn load(&self) -> Result<Vec<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(TpkitError::StoreRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        // Zero-length or whitespace-only files count as never written
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<T> = serde_json::from_str(&content).map_err(|source| TpkitError::CorruptStore {
            path: self.path.clone(),
            source,
        })?;
        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&self, records: &[T]) -> Result<()> {
        let mut body = serde_json::to_string_pretty(records)?;
        body.push('\n');
        fs::write(&self.path, body).map_err(|source| TpkitError::StoreWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalculationEntry, Operation, Task};
    use tempfile::TempDir;

    fn create_test_store() -> (JsonFileStore<Task>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("tasks.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (store, _temp) = create_test_store();
        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let (store, _temp) = create_test_store();
        let tasks = vec![Task::new(1, "Buy milk"), Task::new(2, "Write docs")];

        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn test_save_of_load_is_idempotent() {
        let (store, _temp) = create_test_store();
        let mut done = Task::new(5, "Ship it");
        done.toggle();
        store.save(&[Task::new(2, "Plan"), done]).unwrap();
        let first_bytes = fs::read(store.path()).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();

        assert_eq!(store.load().unwrap(), loaded);
        assert_eq!(fs::read(store.path()).unwrap(), first_bytes);
    }

    #[test]
    fn test_save_overwrites() {
        let (store, _temp) = create_test_store();
        store.save(&[Task::new(1, "a"), Task::new(2, "b")]).unwrap();
        store.save(&[Task::new(3, "c")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![Task::new(3, "c")]);
    }

    #[test]
    fn test_file_is_pretty_json_array() {
        let (store, _temp) = create_test_store();
        store.save(&[Task::new(1, "Buy milk")]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {"));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!([{"id": 1, "title": "Buy milk", "done": false}]));
    }

    #[test]
    fn test_malformed_file_is_corrupt() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "[{\"id\": 1, \"title\": ").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, TpkitError::CorruptStore { .. }));
        // The bad file is left in place
        assert!(store.path().exists());
    }

    #[test]
    fn test_non_array_file_is_corrupt() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "{\"id\": 1}").unwrap();
        assert!(matches!(store.load(), Err(TpkitError::CorruptStore { .. })));
    }

    #[test]
    fn test_blank_file_is_empty() {
        let (store, _temp) = create_test_store();
        fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store: JsonFileStore<Task> = JsonFileStore::new(temp_dir.path().join("nope").join("tasks.json"));

        let err = store.save(&[Task::new(1, "a")]).unwrap_err();
        assert!(matches!(err, TpkitError::StoreWrite { .. }));
        assert!(!temp_dir.path().join("nope").exists());
    }

    #[test]
    fn test_history_entries_roundtrip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let store: JsonFileStore<CalculationEntry> = JsonFileStore::new(temp_dir.path().join("history.json"));
        let entries = vec![
            CalculationEntry::new(Operation::Add, 1.0, 2.0, 3.0),
            CalculationEntry::new(Operation::Div, 1.0, 4.0, 0.25),
        ];

        store.save(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }
}
