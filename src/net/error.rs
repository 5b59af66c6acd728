//! Error type for asset API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorResponse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("could not decode response body: {0}")]
    Decode(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("asset API is only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code and a raw error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: status_message(status, body) }
    }

    /// Whether the request was rejected before any response arrived.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Encode(_) | Self::Unavailable)
    }
}

/// Describe a non-success response, preferring the server's own message.
pub fn status_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.summary().map(str::to_owned))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}
