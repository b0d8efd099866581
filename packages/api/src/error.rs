//! Errors returned by [`crate::ApiClient`].

use serde::Deserialize;
use thiserror::Error;

/// A failed call to the backend.
///
/// `Display` is the message a caller would show or log: the backend's own
/// `message` field when it sent one, otherwise the transport error text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (connection refused, CORS,
    /// malformed JSON in a success body, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a status code and raw response body.
    ///
    /// The backend reports failures as `{"message": "..."}`; anything else falls
    /// back to the HTTP reason phrase.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Request failed with status {}", status))
            });
        Self::Server { status, message }
    }
}
