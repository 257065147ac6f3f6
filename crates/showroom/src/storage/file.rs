//! File-backed storage: one JSON file per profile.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{StorageBackend, StorageError};

/// A durable backend persisting the whole key map to a single JSON file.
///
/// The file holds one flat JSON object of string keys to string values.
/// The map is read once at open; every mutation rewrites the file before
/// returning, and a failed rewrite is rolled back in memory, so handles
/// never read state the file does not hold. Clones share the same map and
/// file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: Arc<PathBuf>,
    data: Arc<Mutex<BTreeMap<String, String>>>,
}

impl JsonFileBackend {
    /// Open the profile file at `path`, starting empty if the file does not
    /// exist yet. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the file exists but cannot be read
    /// or does not contain a JSON string map, or if the parent directory
    /// cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StorageError::Open {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let data: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Open {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StorageError::Open {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        tracing::debug!(path = %path.display(), keys = data.len(), "profile file opened");

        Ok(Self {
            path: Arc::new(path),
            data: Arc::new(Mutex::new(data)),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file from `data`. Called with the lock held so
    /// the file matches the shared map.
    fn persist(&self, data: &BTreeMap<String, String>, key: &str) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(data).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: e.to_string(),
        })?;
        fs::write(self.path.as_ref(), raw).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: e.to_string(),
        })
    }
}

impl StorageBackend for JsonFileBackend {
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
        let previous = data.insert(key.to_owned(), value.to_owned());
        if let Err(err) = self.persist(&data, key) {
            // Put the map back so handles keep reading what the file holds.
            if let Some(old) = previous {
                data.insert(key.to_owned(), old);
            } else {
                data.remove(key);
            }
            return Err(err);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self.data.lock().map_err(|_| StorageError::Remove {
            key: key.to_owned(),
            reason: "storage lock poisoned".to_owned(),
        })?;
        let Some(previous) = data.remove(key) else {
            // Nothing removed; the file already matches the map.
            return Ok(());
        };
        if let Err(err) = self.persist(&data, key) {
            data.insert(key.to_owned(), previous);
            return Err(match err {
                StorageError::Write { key, reason } => StorageError::Remove { key, reason },
                other => other,
            });
        }
        Ok(())
    }
}
