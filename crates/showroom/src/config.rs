//! Showroom configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOWROOM_PROFILE_DIR` - Directory holding the profile file
//!   (default: `.showroom-profile`)

use std::path::PathBuf;

use thiserror::Error;

/// File name of the profile store inside the profile directory.
const PROFILE_FILE_NAME: &str = "profile.json";

/// Default profile directory, relative to the working directory.
const DEFAULT_PROFILE_DIR: &str = ".showroom-profile";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Showroom application configuration.
#[derive(Debug, Clone)]
pub struct ShowroomConfig {
    /// Directory the profile file lives in.
    pub profile_dir: PathBuf,
}

impl ShowroomConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let profile_dir = match std::env::var("SHOWROOM_PROFILE_DIR") {
            Ok(value) if value.is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "SHOWROOM_PROFILE_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_PROFILE_DIR),
        };

        Ok(Self { profile_dir })
    }

    /// Path of the profile file inside the profile directory.
    #[must_use]
    pub fn profile_file(&self) -> PathBuf {
        self.profile_dir.join(PROFILE_FILE_NAME)
    }
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            profile_dir: PathBuf::from(DEFAULT_PROFILE_DIR),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_file_joins_dir() {
        let config = ShowroomConfig {
            profile_dir: PathBuf::from("/tmp/apexgt"),
        };
        assert_eq!(config.profile_file(), PathBuf::from("/tmp/apexgt/profile.json"));
    }

    #[test]
    fn test_default_profile_dir() {
        let config = ShowroomConfig::default();
        assert_eq!(config.profile_dir, PathBuf::from(DEFAULT_PROFILE_DIR));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_from_env_reads_profile_dir() {
        // Single test touches this variable, so no parallel-test races.
        unsafe { std::env::set_var("SHOWROOM_PROFILE_DIR", "/tmp/apexgt-profiles") };
        let config = ShowroomConfig::from_env().unwrap();
        assert_eq!(config.profile_dir, PathBuf::from("/tmp/apexgt-profiles"));

        unsafe { std::env::set_var("SHOWROOM_PROFILE_DIR", "") };
        assert!(matches!(
            ShowroomConfig::from_env(),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));

        unsafe { std::env::remove_var("SHOWROOM_PROFILE_DIR") };
        let config = ShowroomConfig::from_env().unwrap();
        assert_eq!(config.profile_dir, PathBuf::from(DEFAULT_PROFILE_DIR));
    }
}
