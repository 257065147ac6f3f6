//! In-memory storage backend for tests and throwaway profiles.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{StorageBackend, StorageError};

/// An in-memory backend backed by a `BTreeMap`.
///
/// Not persistent; the data is gone when the last handle drops. Clones
/// share one map, the way every script on a page sees one store.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    data: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let data = self.data.lock().map_err(|_| StorageError::Read {
            key: key.to_owned(),
            reason: "storage lock poisoned".to_owned(),
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self.data.lock().map_err(|_| StorageError::Write {
            key: key.to_owned(),
            reason: "storage lock poisoned".to_owned(),
        })?;
        data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self.data.lock().map_err(|_| StorageError::Remove {
            key: key.to_owned(),
            reason: "storage lock poisoned".to_owned(),
        })?;
        data.remove(key);
        Ok(())
    }
}
