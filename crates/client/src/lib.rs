//! ShopJoy API client.
//!
//! A thin REST client for the ShopJoy backend. Every backend endpoint is one
//! method on [`ApiClient`], grouped into per-resource service modules under
//! [`services`]. The client attaches the current session's identity header to
//! every request and normalizes all failures into [`ApiError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopjoy_client::{ApiClient, ApiConfig, AuthContext, SessionStore};
//!
//! let config = ApiConfig::from_env()?;
//! let sessions = SessionStore::load(&config.session_file);
//! let api = ApiClient::new(&config, sessions);
//! let auth = AuthContext::new(api.clone());
//!
//! let session = auth.login("admin", "password").await?;
//! let products = api.get_products_paginated(0, 10, "product_id", "ASC").await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod auth;
mod config;
mod error;
mod http;
mod session;
pub mod services;
pub mod types;

pub use auth::{AuthContext, AuthError};
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use http::ApiClient;
pub use session::{Session, SessionStore};

/// Result type alias for API calls.
pub type Result<T> = std::result::Result<T, ApiError>;
