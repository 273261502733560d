//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPJOY_API_BASE_URL` - Backend base URL (default: `http://localhost:8080/api/v1`)
//! - `SHOPJOY_SESSION_FILE` - Path of the persisted session (default: `.shopjoy-session.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend location used during local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Default location of the persisted session file.
pub const DEFAULT_SESSION_FILE: &str = ".shopjoy-session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// ShopJoy API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Path of the file the session is persisted to.
    pub session_file: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SHOPJOY_API_BASE_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("SHOPJOY_API_BASE_URL", DEFAULT_API_BASE_URL);
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPJOY_API_BASE_URL".to_string(), e.to_string())
        })?;

        let session_file =
            PathBuf::from(get_env_or_default("SHOPJOY_SESSION_FILE", DEFAULT_SESSION_FILE));

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_file,
        })
    }

    /// Build a configuration pointing at an explicit base URL.
    ///
    /// Used by tests that stand in for the backend.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, session_file: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_file: session_file.into(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("http://localhost:9999/api/v1/", "session.json");
        assert_eq!(config.base_url, "http://localhost:9999/api/v1");
    }
}
