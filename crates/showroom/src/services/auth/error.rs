//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during the account flows.
///
/// Everything except [`AuthError::Repository`] is an expected outcome the
/// page copy has a message for; none of them abort anything.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account is registered under the identifier.
    #[error("no account found for this email")]
    AccountNotFound,

    /// The account exists but has not completed verification.
    #[error("account is not verified")]
    Unverified,

    /// The credential does not match the stored one.
    #[error("incorrect password")]
    BadCredential,

    /// An account already exists under the identifier.
    #[error("an account with this email already exists")]
    AlreadyRegistered,

    /// The credential fails the signup rules.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// The two credential fields at signup do not match.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The supplied code is not a complete 6-digit code.
    #[error("enter the complete 6-digit code")]
    IncompleteCode,

    /// The supplied code does not match the pending verification, or no
    /// verification is pending.
    #[error("verification code does not match")]
    CodeMismatch,

    /// Repository/storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}
