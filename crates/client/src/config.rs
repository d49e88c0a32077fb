//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GREENBASKET_STORAGE_DIR` - Directory for the file-backed storage
//!   backend (per-device cart records)
//!
//! ## Optional
//! - `GREENBASKET_LOG` - Diagnostic filter directive passed to the tracing
//!   subscriber (e.g. `greenbasket_client=debug`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory the file-backed storage backend writes into.
    pub storage_dir: PathBuf,
    /// Diagnostic filter directive, if configured.
    pub log_filter: Option<String>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir = get_required_env("GREENBASKET_STORAGE_DIR")?;
        if storage_dir.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "GREENBASKET_STORAGE_DIR".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            storage_dir: PathBuf::from(storage_dir),
            log_filter: get_optional_env("GREENBASKET_LOG"),
        })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_storage_dir_is_named_error() {
        // GREENBASKET_STORAGE_DIR is not set in the test environment.
        match ClientConfig::from_env() {
            Err(ConfigError::MissingEnvVar(var)) => {
                assert_eq!(var, "GREENBASKET_STORAGE_DIR");
            }
            other => panic!("expected MissingEnvVar, got {other:?}"),
        }
    }

    #[test]
    fn test_error_display_names_the_variable() {
        let err = ConfigError::MissingEnvVar("GREENBASKET_STORAGE_DIR".to_owned());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: GREENBASKET_STORAGE_DIR"
        );
    }
}
