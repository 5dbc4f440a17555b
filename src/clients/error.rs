//! Gateway error types.

use thiserror::Error;

/// Errors surfaced by the remote gateways.
///
/// Transport problems and non-success statuses are folded into this one
/// taxonomy so the view controllers can map any failure to a user-facing
/// message without inspecting reqwest internals.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed in transit (connection, timeout, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the request payload (HTTP 400).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The owning view was torn down while the request was in flight.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// True when the failure means the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

/// Result type for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;
