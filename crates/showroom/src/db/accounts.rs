//! Account repository over the profile store.
//!
//! All accounts live under the single `users` key as one JSON object keyed
//! by identifier. Every operation reads the whole blob, updates it, and
//! writes it back in one piece; at this page's scale that is a handful of
//! entries.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Account;
use crate::storage::StorageBackend;

use super::{RepositoryError, storage_keys};

/// Stored shape of one account inside the `users` blob.
///
/// Field names are part of the durable format; `createdAt` keeps the camel
/// case the page has always written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRow {
    password: String,
    verified: bool,
    created_at: DateTime<Utc>,
}

/// Repository for account operations against the profile store.
pub struct AccountRepository<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> AccountRepository<B> {
    /// Create a new account repository over `backend`.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Register an account under `email`.
    ///
    /// An existing account under the same identifier is silently replaced,
    /// resetting its verified flag and creation time. Refusing duplicates
    /// is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the profile store fails.
    /// Returns [`RepositoryError::DataCorruption`] if the existing blob is
    /// not valid JSON.
    pub fn register(&self, email: &str, password: &str) -> Result<(), RepositoryError> {
        let mut rows = self.load_rows()?;
        rows.insert(
            email.to_owned(),
            AccountRow {
                password: password.to_owned(),
                verified: false,
                created_at: Utc::now(),
            },
        );
        self.save_rows(&rows)
    }

    /// Look up an account by identifier (exact match, no normalization).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the profile store fails.
    /// Returns [`RepositoryError::DataCorruption`] if the blob is not valid
    /// JSON.
    pub fn lookup(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let rows = self.load_rows()?;
        Ok(rows.get(email).map(|row| to_account(email, row)))
    }

    /// Flip the verified flag for `email`.
    ///
    /// Returns `Ok(false)` without writing anything when no account exists
    /// under the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the profile store fails.
    /// Returns [`RepositoryError::DataCorruption`] if the blob is not valid
    /// JSON.
    pub fn mark_verified(&self, email: &str) -> Result<bool, RepositoryError> {
        let mut rows = self.load_rows()?;
        let Some(row) = rows.get_mut(email) else {
            return Ok(false);
        };
        row.verified = true;
        self.save_rows(&rows)?;
        Ok(true)
    }

    /// Check whether `email` names a verified account holding `password`.
    ///
    /// Collapses "no such account", "not verified", and "wrong credential"
    /// into `Ok(false)`; callers that need the cause use [`Self::lookup`]
    /// and branch themselves.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the profile store fails.
    /// Returns [`RepositoryError::DataCorruption`] if the blob is not valid
    /// JSON.
    pub fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<bool, RepositoryError> {
        let rows = self.load_rows()?;
        Ok(rows
            .get(email)
            .is_some_and(|row| row.verified && row.password == password))
    }

    // =========================================================================
    // Session marker
    // =========================================================================

    /// Record `email` as the logged-in account.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the marker cannot be written.
    pub fn set_current_user(&self, email: &str) -> Result<(), RepositoryError> {
        self.backend.set(storage_keys::CURRENT_USER, email)?;
        Ok(())
    }

    /// Identifier of the logged-in account, if any.
    ///
    /// The marker is trusted as written; it is not checked against the
    /// registered accounts.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the marker cannot be read.
    pub fn current_user(&self) -> Result<Option<String>, RepositoryError> {
        Ok(self.backend.get(storage_keys::CURRENT_USER)?)
    }

    /// Clear the logged-in marker. Clearing an absent marker is fine.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] if the marker cannot be removed.
    pub fn clear_current_user(&self) -> Result<(), RepositoryError> {
        self.backend.remove(storage_keys::CURRENT_USER)?;
        Ok(())
    }

    // =========================================================================
    // Blob I/O
    // =========================================================================

    fn load_rows(&self) -> Result<BTreeMap<String, AccountRow>, RepositoryError> {
        let Some(raw) = self.backend.get(storage_keys::USERS)? else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid users blob: {e}")))
    }

    fn save_rows(&self, rows: &BTreeMap<String, AccountRow>) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(rows).map_err(|e| {
            RepositoryError::DataCorruption(format!("failed to serialize users blob: {e}"))
        })?;
        self.backend.set(storage_keys::USERS, &raw)?;
        Ok(())
    }
}

fn to_account(email: &str, row: &AccountRow) -> Account {
    Account {
        email: email.to_owned(),
        password: row.password.clone(),
        verified: row.verified,
        created_at: row.created_at,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn repo() -> AccountRepository<MemoryBackend> {
        AccountRepository::new(MemoryBackend::new())
    }

    #[test]
    fn test_register_then_lookup() {
        let repo = repo();
        repo.register("kai@example.com", "turbo").unwrap();

        let account = repo.lookup("kai@example.com").unwrap().unwrap();
        assert_eq!(account.email, "kai@example.com");
        assert_eq!(account.password, "turbo");
        assert!(!account.verified);
    }

    #[test]
    fn test_lookup_missing_returns_none() {
        let repo = repo();
        assert!(repo.lookup("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let repo = repo();
        repo.register("Kai@Example.com", "turbo").unwrap();
        assert!(repo.lookup("kai@example.com").unwrap().is_none());
        assert!(repo.lookup("Kai@Example.com").unwrap().is_some());
    }

    #[test]
    fn test_register_overwrites_existing() {
        let repo = repo();
        repo.register("kai@example.com", "first").unwrap();
        assert!(repo.mark_verified("kai@example.com").unwrap());

        // Same identifier again: record replaced, verified flag reset.
        repo.register("kai@example.com", "second").unwrap();
        let account = repo.lookup("kai@example.com").unwrap().unwrap();
        assert_eq!(account.password, "second");
        assert!(!account.verified);
    }

    #[test]
    fn test_mark_verified_missing_returns_false() {
        let repo = repo();
        repo.register("kai@example.com", "turbo").unwrap();

        assert!(!repo.mark_verified("nobody@example.com").unwrap());
        // Registered accounts are untouched.
        let account = repo.lookup("kai@example.com").unwrap().unwrap();
        assert!(!account.verified);
    }

    #[test]
    fn test_validate_credentials_requires_verified() {
        let repo = repo();
        repo.register("kai@example.com", "turbo").unwrap();
        assert!(!repo.validate_credentials("kai@example.com", "turbo").unwrap());

        repo.mark_verified("kai@example.com").unwrap();
        assert!(repo.validate_credentials("kai@example.com", "turbo").unwrap());
    }

    #[test]
    fn test_validate_credentials_wrong_password() {
        let repo = repo();
        repo.register("kai@example.com", "turbo").unwrap();
        repo.mark_verified("kai@example.com").unwrap();

        assert!(!repo.validate_credentials("kai@example.com", "Turbo").unwrap());
        assert!(!repo.validate_credentials("kai@example.com", "").unwrap());
    }

    #[test]
    fn test_validate_credentials_unknown_identifier() {
        let repo = repo();
        assert!(!repo.validate_credentials("nobody@example.com", "x").unwrap());
    }

    #[test]
    fn test_session_marker_set_read_clear() {
        let repo = repo();
        assert_eq!(repo.current_user().unwrap(), None);

        repo.set_current_user("kai@example.com").unwrap();
        assert_eq!(
            repo.current_user().unwrap().as_deref(),
            Some("kai@example.com")
        );

        repo.clear_current_user().unwrap();
        assert_eq!(repo.current_user().unwrap(), None);
    }

    #[test]
    fn test_session_marker_not_checked_against_accounts() {
        let repo = repo();
        repo.set_current_user("ghost@example.com").unwrap();
        assert_eq!(
            repo.current_user().unwrap().as_deref(),
            Some("ghost@example.com")
        );
    }

    #[test]
    fn test_corrupted_blob_reports_data_corruption() {
        let backend = MemoryBackend::new();
        backend.set(storage_keys::USERS, "{not json").unwrap();

        let repo = AccountRepository::new(backend);
        let err = repo.lookup("kai@example.com").unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    #[test]
    fn test_users_blob_keeps_camel_case_fields() {
        let backend = MemoryBackend::new();
        let repo = AccountRepository::new(backend.clone());
        repo.register("kai@example.com", "turbo").unwrap();

        let raw = backend.get(storage_keys::USERS).unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let row = parsed.get("kai@example.com").unwrap();
        assert_eq!(row.get("password").and_then(|v| v.as_str()), Some("turbo"));
        assert_eq!(row.get("verified").and_then(serde_json::Value::as_bool), Some(false));
        assert!(row.get("createdAt").is_some());
        assert!(row.get("created_at").is_none());
    }
}
