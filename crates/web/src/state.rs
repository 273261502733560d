//! Application state shared across handlers.

use std::sync::Arc;

use shopjoy_client::{ApiClient, AuthContext};

use crate::config::WebConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The API client and auth context share one
/// session store, so a login performed through [`AppState::auth`] is visible
/// to every request issued through [`AppState::api`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    api: ApiClient,
    auth: AuthContext,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: WebConfig, api: ApiClient, auth: AuthContext) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, api, auth }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get a reference to the auth context.
    #[must_use]
    pub fn auth(&self) -> &AuthContext {
        &self.inner.auth
    }
}
