//! Profile storage for the showroom page.
//!
//! The page keeps its durable state in a per-profile string key-value
//! store. [`StorageBackend`] is that surface as a trait, so the rest of the
//! crate can run against an in-memory map in tests and a JSON file on disk
//! otherwise.
//!
//! # Backends
//!
//! - [`MemoryBackend`] - `BTreeMap` behind a mutex, for tests and
//!   throwaway profiles
//! - [`JsonFileBackend`] - one JSON file per profile, written through on
//!   every mutation

mod file;
mod memory;

pub use file::JsonFileBackend;
pub use memory::MemoryBackend;

use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// Every variant carries enough context to diagnose the problem without a
/// debugger.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to open the profile at the given path.
    #[error("failed to open profile at '{path}': {reason}")]
    Open { path: String, reason: String },

    /// Failed to read a value.
    #[error("failed to read key '{key}': {reason}")]
    Read { key: String, reason: String },

    /// Failed to write a value.
    #[error("failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },

    /// Failed to remove a key.
    #[error("failed to remove key '{key}': {reason}")]
    Remove { key: String, reason: String },
}

/// A synchronous string key-value store, one instance per profile.
///
/// Models the browser's per-profile storage surface: string keys, string
/// values, absent keys read as `None`, writes visible immediately.
/// Implementations are cheap-clone handles onto shared state, so every
/// component holding a clone sees the same data.
pub trait StorageBackend {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] if the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
