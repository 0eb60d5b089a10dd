//! Durable key-value backends
//!
//! The record store keeps each collection under a fixed key. A backend only
//! has to get and replace whole values; there is no partial update.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{FarmError, FarmResult};

use super::file_io::{read_bytes, write_bytes_atomic};

/// Whole-value key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if the key was never written
    fn get(&self, key: &str) -> FarmResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &[u8]) -> FarmResult<()>;
}

/// One JSON document per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File that holds the value for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> FarmResult<Option<Vec<u8>>> {
        read_bytes(self.path_for(key))
    }

    fn set(&self, key: &str, value: &[u8]) -> FarmResult<()> {
        let path = self.path_for(key);
        debug!(key, bytes = value.len(), path = %path.display(), "writing snapshot");
        write_bytes_atomic(path, value)
    }
}

/// Process-local backend, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key before handing the backend to a store
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), value.into());
        }
        self
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> FarmResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FarmError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> FarmResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FarmError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKvStore::new(temp_dir.path().to_path_buf());
        assert!(store.get("farm_expenses").unwrap().is_none());
    }

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKvStore::new(temp_dir.path().join("data"));

        store.set("farm_sales", b"[]").unwrap();
        assert_eq!(store.get("farm_sales").unwrap().unwrap(), b"[]");
        assert!(temp_dir.path().join("data").join("farm_sales.json").exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryKvStore::new().with_entry("a", "1");
        assert_eq!(store.get("a").unwrap().unwrap(), b"1");

        store.set("a", b"2").unwrap();
        assert_eq!(store.get("a").unwrap().unwrap(), b"2");
        assert!(store.get("b").unwrap().is_none());
    }
}
