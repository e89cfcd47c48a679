//! Configuration management for the MindEase client.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The backend endpoint used
//! to be compiled into the app; it is now configurable so the same binary can
//! point at a local dev server or a deployed instance.
//!
//! # Environment Variables
//!
//! - `MINDEASE_API_URL`: Base URL of the MindEase backend
//!   (defaults to <http://127.0.0.1:8000>)

use crate::constants::{DEFAULT_BASE_URL, ENV_VAR_API_URL};
use crate::errors::{AppError, AppResult};
use std::env;

/// Configuration for the MindEase client.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use mindease_client::Config;
///
/// let config = Config {
///     base_url: "http://127.0.0.1:8000".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the MindEase backend, without a trailing slash.
    ///
    /// Loaded from the MINDEASE_API_URL environment variable with a fallback
    /// to the local development default.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Trailing slashes are trimmed from the base URL so path construction
    /// can always join with a single `/`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the resulting URL fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mindease_client::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Using backend at {}", config.base_url),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let raw = env::var(ENV_VAR_API_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let config = Config {
            base_url: raw.trim_end_matches('/').to_string(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the base URL is empty or does not use
    /// an http(s) scheme.
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.is_empty() {
            return Err(AppError::Config("Backend base URL is empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Backend base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}
