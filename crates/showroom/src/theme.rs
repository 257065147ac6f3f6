//! Theme preference persisted in the profile store.

use std::str::FromStr;

use apexgt_core::ThemeMode;

use crate::storage::{StorageBackend, StorageError};

/// Profile-store key holding the theme preference.
pub const THEME_MODE_KEY: &str = "theme_mode";

/// Persisted theme preference.
///
/// Reads are lenient: an absent or unrecognized stored value falls back to
/// the default dark mode. Writes go through immediately.
pub struct ThemeStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ThemeStore<B> {
    /// Create a theme store over `backend`.
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Current theme mode.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the profile store cannot be read.
    pub fn mode(&self) -> Result<ThemeMode, StorageError> {
        let Some(raw) = self.backend.get(THEME_MODE_KEY)? else {
            return Ok(ThemeMode::default());
        };
        Ok(ThemeMode::from_str(&raw).unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "unrecognized stored theme, using default");
            ThemeMode::default()
        }))
    }

    /// Persist `mode` as the preference.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the preference cannot be written.
    pub fn set(&self, mode: ThemeMode) -> Result<(), StorageError> {
        self.backend.set(THEME_MODE_KEY, mode.as_str())
    }

    /// Flip the preference, persist it, and return the new mode.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the profile store fails.
    pub fn toggle(&self) -> Result<ThemeMode, StorageError> {
        let next = self.mode()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}
