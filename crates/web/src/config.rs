//! Web console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPJOY_WEB_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPJOY_WEB_PORT` - Listen port (default: 3000)
//!
//! Backend connection variables are documented in `shopjoy_client::ApiConfig`.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use shopjoy_client::ApiConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error(transparent)]
    Api(#[from] shopjoy_client::ConfigError),
}

/// Web console configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Listen port.
    pub port: u16,
    /// Backend API connection settings.
    pub api: ApiConfig,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api = ApiConfig::from_env()?;

        let host = get_env_or_default("SHOPJOY_WEB_HOST", DEFAULT_HOST);
        let host: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar("SHOPJOY_WEB_HOST".to_string(), host))?;

        let port = match std::env::var("SHOPJOY_WEB_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("SHOPJOY_WEB_PORT".to_string(), raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port, api })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let config = WebConfig {
            host: DEFAULT_HOST.parse().unwrap(),
            port: 4000,
            api: ApiConfig::with_base_url("http://localhost:8080/api/v1", "s.json"),
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
    }
}
