//! Assembled page state.

use crate::config::ShowroomConfig;
use crate::services::auth::AuthService;
use crate::services::verification::{LoggingDelivery, VerificationDelivery};
use crate::storage::{JsonFileBackend, MemoryBackend, StorageBackend, StorageError};
use crate::theme::ThemeStore;

/// Everything the page hangs onto: the account flows and the theme store
/// over one shared profile backend.
///
/// There is no process-wide instance. Whoever drives the page owns a
/// `Showroom`, and any number of independent ones can coexist; every test
/// builds its own.
pub struct Showroom<B: StorageBackend, D: VerificationDelivery> {
    auth: AuthService<B, D>,
    theme: ThemeStore<B>,
}

impl Showroom<JsonFileBackend, LoggingDelivery> {
    /// Open the page state over the configured profile file, with
    /// delivered codes going to the log.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the profile file exists but
    /// cannot be read.
    pub fn open(config: &ShowroomConfig) -> Result<Self, StorageError> {
        let backend = JsonFileBackend::open(config.profile_file())?;
        tracing::info!(path = %backend.path().display(), "profile opened");
        Ok(Self::with_backend(backend, LoggingDelivery))
    }
}

impl Showroom<MemoryBackend, LoggingDelivery> {
    /// Page state over a throwaway in-memory profile.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new(), LoggingDelivery)
    }
}

impl<B: StorageBackend + Clone, D: VerificationDelivery> Showroom<B, D> {
    /// Assemble the page state over `backend` and `delivery`.
    pub fn with_backend(backend: B, delivery: D) -> Self {
        Self {
            auth: AuthService::new(backend.clone(), delivery),
            theme: ThemeStore::new(backend),
        }
    }
}

impl<B: StorageBackend, D: VerificationDelivery> Showroom<B, D> {
    /// The account flows.
    #[must_use]
    pub const fn auth(&self) -> &AuthService<B, D> {
        &self.auth
    }

    /// Mutable access to the account flows.
    pub fn auth_mut(&mut self) -> &mut AuthService<B, D> {
        &mut self.auth
    }

    /// The theme store.
    #[must_use]
    pub const fn theme(&self) -> &ThemeStore<B> {
        &self.theme
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_instances_are_independent() {
        let mut first = Showroom::in_memory();
        let second = Showroom::in_memory();

        first
            .auth_mut()
            .sign_up("kai@example.com", "turbo", "turbo")
            .unwrap();

        assert!(
            first
                .auth()
                .accounts()
                .lookup("kai@example.com")
                .unwrap()
                .is_some()
        );
        assert!(
            second
                .auth()
                .accounts()
                .lookup("kai@example.com")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_auth_and_theme_share_one_profile() {
        let backend = MemoryBackend::new();
        let showroom = Showroom::with_backend(backend.clone(), LoggingDelivery);

        showroom.theme().toggle().unwrap();
        assert_eq!(backend.get("theme_mode").unwrap().as_deref(), Some("light"));
    }
}
