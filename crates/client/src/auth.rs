//! Auth context: the single writer of the session slot.
//!
//! Two states: anonymous (no session) and authenticated. `login` is the only
//! way in, `logout` the only way out; everything else reads through
//! [`AuthContext::current`] or the store directly.

use thiserror::Error;

use crate::http::ApiClient;
use crate::session::{Session, SessionError};
use crate::types::Credentials;
use crate::{ApiError, SessionStore};

/// Errors that can occur logging in or out.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authenticate call failed (bad credentials, backend down, ...).
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The session could not be persisted.
    #[error("session persistence failed: {0}")]
    Persistence(#[from] SessionError),
}

impl AuthError {
    /// User-facing message for this failure.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api(e) => e.message(),
            Self::Persistence(e) => e.to_string(),
        }
    }
}

/// Owner of the session lifecycle.
#[derive(Clone)]
pub struct AuthContext {
    api: ApiClient,
}

impl AuthContext {
    /// Create the auth context over an API client (and its session store).
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The current session, if authenticated.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.store().current()
    }

    /// Whether a session is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store().is_authenticated()
    }

    /// Whether the current session has the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current().is_some_and(|s| s.is_admin())
    }

    /// Whether the current session has the customer role.
    #[must_use]
    pub fn is_customer(&self) -> bool {
        self.current().is_some_and(|s| s.is_customer())
    }

    /// Authenticate against the backend and enter the authenticated state.
    ///
    /// On success the session is stored and persisted. On failure the
    /// current state - whatever it was - is left untouched and the error is
    /// propagated to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the credentials are rejected, the request
    /// fails, or the session cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let user = self
            .api
            .authenticate_user(&Credentials {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;

        let session = Session {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            user_type: user.user_type,
        };
        self.store().set(session.clone())?;

        tracing::info!(user_id = %session.user_id, user_type = %session.user_type, "logged in");
        Ok(session)
    }

    /// Unconditionally enter the anonymous state.
    ///
    /// The in-memory slot is cleared even when removing the persisted file
    /// fails; that failure is the only error this can return.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Persistence` if the session file exists but could
    /// not be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store().clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    fn store(&self) -> &SessionStore {
        self.api.session_store()
    }
}
