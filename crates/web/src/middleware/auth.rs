//! Authentication extractors.
//!
//! Handlers declare their access requirement by taking one of these
//! extractors. All of them read the session slot held by the shared auth
//! context; none of them touch the network.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use shopjoy_client::Session;

use crate::state::AppState;

/// Extractor that requires a logged-in session.
///
/// Anonymous requests are redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn orders(RequireAuth(session): RequireAuth) -> impl IntoResponse {
///     format!("orders for {}", session.username)
/// }
/// ```
pub struct RequireAuth(pub Session);

/// Extractor that requires a logged-in admin session.
///
/// Anonymous requests are redirected to the login page; authenticated
/// non-admin sessions get 403.
pub struct RequireAdmin(pub Session);

/// Extractor that reads the session without requiring one.
pub struct OptionalSession(pub Option<Session>);

/// Rejection for the auth extractors.
pub enum AuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// Authenticated but not allowed.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Forbidden => {
                (StatusCode::FORBIDDEN, "Admin access required").into_response()
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .auth()
            .current()
            .map(Self)
            .ok_or(AuthRejection::RedirectToLogin)
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state
            .auth()
            .current()
            .ok_or(AuthRejection::RedirectToLogin)?;
        if session.is_admin() {
            Ok(Self(session))
        } else {
            Err(AuthRejection::Forbidden)
        }
    }
}

impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.auth().current()))
    }
}
