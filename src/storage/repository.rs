//! Ordered record collection with snapshot persistence
//!
//! A repository holds one collection in insertion order and writes the whole
//! collection under its storage key whenever asked to save.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::error::{FarmError, FarmResult};
use crate::models::Record;

use super::kv::KeyValueStore;

/// Repository for one record type
pub struct RecordRepository<R: Record> {
    backend: Arc<dyn KeyValueStore>,
    data: RwLock<Vec<R>>,
}

impl<R: Record> RecordRepository<R> {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn key(&self) -> &'static str {
        R::KIND.storage_key()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<R>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<R>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Restore the collection from the backend
    ///
    /// An absent key, an unreadable backend, or a snapshot that no longer
    /// decodes all leave the collection empty. Returns the number of records
    /// restored.
    pub fn load(&self) -> usize {
        let restored = match self.backend.get(self.key()) {
            Ok(None) => Vec::new(),
            Ok(Some(bytes)) => serde_json::from_slice::<Vec<R>>(&bytes).unwrap_or_else(|e| {
                warn!(key = self.key(), error = %e, "stored snapshot does not decode, starting empty");
                Vec::new()
            }),
            Err(e) => {
                warn!(key = self.key(), error = %e, "could not read stored snapshot, starting empty");
                Vec::new()
            }
        };

        let count = restored.len();
        *self.write() = restored;
        debug!(key = self.key(), count, "collection restored");
        count
    }

    /// Serialize the whole collection and overwrite the stored snapshot
    pub fn save(&self) -> FarmResult<()> {
        let bytes = {
            let data = self.read();
            serde_json::to_vec(&*data)
                .map_err(|e| FarmError::Storage(format!("Failed to serialize {}: {}", self.key(), e)))?
        };
        self.backend.set(self.key(), &bytes)
    }

    /// Append a record
    pub fn push(&self, record: R) {
        self.write().push(record);
    }

    /// Replace the record with the same id in place, returning the old one
    pub fn replace(&self, record: R) -> Option<R> {
        let mut data = self.write();
        let slot = data.iter_mut().find(|r| r.id() == record.id())?;
        Some(std::mem::replace(slot, record))
    }

    /// Remove every record with the given id, returning what was removed
    pub fn remove(&self, id: R::Id) -> Vec<R> {
        let mut data = self.write();
        let mut removed = Vec::new();
        let mut i = 0;
        while i < data.len() {
            if data[i].id() == id {
                removed.push(data.remove(i));
            } else {
                i += 1;
            }
        }
        removed
    }

    pub fn get(&self, id: R::Id) -> Option<R> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    /// All records, in insertion order
    pub fn get_all(&self) -> Vec<R> {
        self.read().clone()
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }
}
