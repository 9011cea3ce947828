use thiserror::Error;

use crate::utils::truncate;

/// Message used when the server response carries no usable `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Message carried by [`ApiError::SessionExpired`].
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired";

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The session could not be refreshed. Both credentials have already been
    /// cleared and session-expired listeners notified.
    #[error("Session expired")]
    SessionExpired,

    #[error("Request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build a `Request` error from a non-success response body.
    ///
    /// The message is the string `detail` field of a JSON body when present,
    /// otherwise [`GENERIC_FAILURE_MESSAGE`].
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Request {
            status: status.as_u16(),
            message: Self::extract_detail(body)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    /// Build an `InvalidResponse` error for a body that could not be decoded.
    pub fn invalid_body(err: &serde_json::Error, body: &str) -> Self {
        ApiError::InvalidResponse(format!(
            "{} (body: {})",
            err,
            truncate(body, MAX_ERROR_BODY_LENGTH)
        ))
    }

    fn extract_detail(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("detail")
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }

    /// HTTP status associated with the error.
    ///
    /// `SessionExpired` always reports 401. Transport and decode failures
    /// have no status.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::SessionExpired => Some(401),
            ApiError::Request { status, .. } => Some(*status),
            ApiError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidResponse(_) | ApiError::InvalidRequest(_) => None,
        }
    }

    /// Human-readable message without the status prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::SessionExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            ApiError::Request { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}
