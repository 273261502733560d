//! Unified error handling for the web console.
//!
//! Route handlers return `Result<T, AppError>`. Backend failures are logged
//! and rendered with the client's resolved user-facing message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use shopjoy_client::{ApiError, AuthError};

/// Application-level error type for the web console.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Login or logout failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Api(_)) {
            tracing::error!(error = %self, "Backend request error");
        }

        let status = match &self {
            Self::Api(_) | Self::Auth(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            Self::Api(e) => e.message(),
            Self::Auth(e) => e.message(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
