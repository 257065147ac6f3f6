//! Account domain types.
//!
//! These types are the page's view of an account, separate from the stored
//! row shape inside the `users` blob.

use chrono::{DateTime, Utc};

/// A registered account (domain type).
///
/// Mock data for a marketing page: the identifier is whatever string the
/// visitor typed, and the credential is kept exactly as entered. Nothing
/// here is validated, normalized, or hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Identifier the account is keyed by (an email-like string, compared
    /// exactly as entered).
    pub email: String,
    /// Credential as entered at signup.
    pub password: String,
    /// Whether the verification flow has completed for this account.
    pub verified: bool,
    /// When the account was created. Informational only; never read back
    /// by any flow.
    pub created_at: DateTime<Utc>,
}
