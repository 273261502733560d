//! Error type for backend API calls.
//!
//! Every failure - transport, decoding, or a backend rejection - collapses
//! into [`ApiError`], and [`ApiError::message`] resolves the one string views
//! show the user.

use reqwest::StatusCode;
use thiserror::Error;

/// Fallback shown when neither the backend nor the transport supplied a
/// usable message.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors that can occur when calling the ShopJoy backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the request (non-2xx status or `success: false`).
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Message supplied by the backend envelope, possibly empty.
        message: String,
    },

    /// HTTP request failed before a response envelope was available.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The user-facing message for this failure.
    ///
    /// Resolution order: backend-supplied message, then transport error text,
    /// then a generic fallback.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, status } => {
                if message.is_empty() {
                    format!("Request failed with status {status}")
                } else {
                    message.clone()
                }
            }
            Self::Transport(e) => {
                let text = e.to_string();
                if text.is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    text
                }
            }
            Self::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Api {
            status: StatusCode::CONFLICT,
            message: "SKU already exists".to_string(),
        };
        assert_eq!(err.message(), "SKU already exists");
    }

    #[test]
    fn test_empty_server_message_falls_back_to_status() {
        let err = ApiError::Api {
            status: StatusCode::BAD_GATEWAY,
            message: String::new(),
        };
        assert_eq!(err.message(), "Request failed with status 502 Bad Gateway");
    }

    #[test]
    fn test_decode_error_is_generic() {
        let parse_err = serde_json::from_str::<i32>("oops").unwrap_err();
        let err = ApiError::Decode(parse_err);
        assert_eq!(err.message(), GENERIC_ERROR_MESSAGE);
    }
}
