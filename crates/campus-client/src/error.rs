//! Error types for the campus client.
//!
//! Every failure an API call can produce is folded into [`ClientError`] so
//! callers get one rejected type with a human-readable message, never the
//! raw response envelope.

use thiserror::Error;

/// Client-side errors for campus API calls.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered 2xx but the envelope said `OperationFailed`.
    #[error("{message}")]
    Api { message: String },

    /// The backend answered with an HTTP error status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// HTTP 401. The persisted session has already been cleared by the
    /// time this is returned; navigating to login is the caller's job.
    #[error("{message}")]
    Unauthorized { message: String },

    /// No response was received (connect failure, timeout, DNS).
    #[error("network error")]
    Network(#[source] reqwest::Error),

    /// The response body did not match the expected payload shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Persisting session state to disk failed.
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// True for errors that invalidate the local session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }
}

/// Result type alias using ClientError.
pub type Result<T> = std::result::Result<T, ClientError>;
