//! Account flows behind the page's auth modal.
//!
//! Signup, login, verification, and logout against the profile-backed
//! account repository. The flows own the single pending verification and
//! the delivery seam; the repository underneath stays policy-free.

mod error;

pub use error::AuthError;

use crate::db::AccountRepository;
use crate::easter_egg;
use crate::storage::StorageBackend;

use super::verification::{CODE_LENGTH, VerificationDelivery, VerificationState};

/// Minimum password length at signup.
const MIN_PASSWORD_LENGTH: usize = 5;

/// How a successful login resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials checked out; the session marker is set.
    LoggedIn,
    /// The hidden credential pair was entered; nothing was read from or
    /// written to the store.
    EasterEgg,
}

/// Authentication service.
///
/// Owns the account repository, the pending verification, and the delivery
/// collaborator that surfaces codes to the visitor.
pub struct AuthService<B: StorageBackend, D: VerificationDelivery> {
    accounts: AccountRepository<B>,
    verification: VerificationState,
    delivery: D,
}

impl<B: StorageBackend, D: VerificationDelivery> AuthService<B, D> {
    /// Create a new authentication service over `backend`.
    #[must_use]
    pub const fn new(backend: B, delivery: D) -> Self {
        Self {
            accounts: AccountRepository::new(backend),
            verification: VerificationState::new(),
            delivery,
        }
    }

    /// The underlying account repository.
    #[must_use]
    pub const fn accounts(&self) -> &AccountRepository<B> {
        &self.accounts
    }

    // =========================================================================
    // Signup
    // =========================================================================

    /// Register a new account and issue its verification code.
    ///
    /// The account starts unverified; the code goes out through the
    /// delivery collaborator and the visitor confirms it via
    /// [`Self::verify_code`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password is shorter than 5
    /// characters.
    /// Returns `AuthError::PasswordMismatch` if `confirm` differs.
    /// Returns `AuthError::AlreadyRegistered` if the identifier is taken.
    pub fn sign_up(&mut self, email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
        let email = email.trim();

        validate_password(password)?;
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }
        if self.accounts.lookup(email)?.is_some() {
            return Err(AuthError::AlreadyRegistered);
        }

        self.accounts.register(email, password)?;
        tracing::debug!(email = %email, "account registered, awaiting verification");
        self.send_code(email);
        Ok(())
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Log in with an identifier and password.
    ///
    /// The hidden credential pair is checked first and resolves to
    /// [`LoginOutcome::EasterEgg`] without touching the store. An
    /// unverified account gets a fresh code delivered before the error
    /// comes back, so the visitor can finish verification straight away.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AccountNotFound` if no account exists.
    /// Returns `AuthError::Unverified` if the account has not confirmed a
    /// code yet (a fresh code is issued and delivered first).
    /// Returns `AuthError::BadCredential` if the password is wrong.
    pub fn log_in(&mut self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let email = email.trim();

        if easter_egg::matches(email, password) {
            tracing::info!("hidden credential pair entered");
            return Ok(LoginOutcome::EasterEgg);
        }

        let Some(account) = self.accounts.lookup(email)? else {
            return Err(AuthError::AccountNotFound);
        };

        if !account.verified {
            self.send_code(email);
            return Err(AuthError::Unverified);
        }

        if account.password != password {
            return Err(AuthError::BadCredential);
        }

        self.accounts.set_current_user(email)?;
        tracing::debug!(email = %email, "logged in");
        Ok(LoginOutcome::LoggedIn)
    }

    // =========================================================================
    // Verification
    // =========================================================================

    /// Confirm the pending verification with `code`.
    ///
    /// On success the account is marked verified, the session marker is
    /// set, and the verified identifier is returned.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::IncompleteCode` if `code` is not 6 characters.
    /// Returns `AuthError::CodeMismatch` if it does not match the pending
    /// code (the pending pair stays in place for another try).
    /// Returns `AuthError::AccountNotFound` if the pending identifier has
    /// no account.
    pub fn verify_code(&mut self, code: &str) -> Result<String, AuthError> {
        if code.len() != CODE_LENGTH {
            return Err(AuthError::IncompleteCode);
        }

        let Some(email) = self.verification.consume(code) else {
            return Err(AuthError::CodeMismatch);
        };

        if !self.accounts.mark_verified(&email)? {
            return Err(AuthError::AccountNotFound);
        }

        self.accounts.set_current_user(&email)?;
        tracing::debug!(email = %email, "account verified");
        Ok(email)
    }

    /// Re-deliver a code for the pending verification, if there is one.
    ///
    /// Issues a fresh code (the prior one stops matching) and hands it to
    /// delivery. Returns `false`, doing nothing, when no verification is
    /// pending.
    pub fn resend_code(&mut self) -> bool {
        let Some(email) = self.verification.pending_email().map(str::to_owned) else {
            return false;
        };
        self.send_code(&email);
        true
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Identifier of the logged-in account, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the profile store fails.
    pub fn current_user(&self) -> Result<Option<String>, AuthError> {
        Ok(self.accounts.current_user()?)
    }

    /// Clear the session marker.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the profile store fails.
    pub fn log_out(&self) -> Result<(), AuthError> {
        self.accounts.clear_current_user()?;
        tracing::debug!("logged out");
        Ok(())
    }

    fn send_code(&mut self, email: &str) {
        let code = self.verification.issue(email);
        self.delivery.deliver_code(email, &code);
    }
}

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
