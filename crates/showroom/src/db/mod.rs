//! Profile-store operations for the showroom.
//!
//! Durable page state lives in the profile store under a handful of
//! well-known keys:
//!
//! - `users` - every registered account, one JSON blob
//! - `current_user` - identifier of the logged-in account, if any
//!
//! The theme preference sits under its own independent key owned by
//! [`crate::theme`].

pub mod accounts;

pub use accounts::AccountRepository;

use thiserror::Error;

use crate::storage::StorageError;

/// Well-known keys in the profile store.
pub mod storage_keys {
    /// All registered accounts, serialized as one JSON object.
    pub const USERS: &str = "users";
    /// Identifier of the currently logged-in account.
    pub const CURRENT_USER: &str = "current_user";
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage error from the profile backend.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Data in the profile store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}
