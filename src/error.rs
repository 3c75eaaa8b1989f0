//! Error taxonomy for the client core.
//!
//! Every failure is terminal for the action that triggered it: controllers log it where it
//! happens and hand it back to the caller, nothing is retried.

use thiserror::Error;

/// Input rejected before any network call is made.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "Please enter a valid URL. The URL may include a protocol (http:// or https://) \
         and must have a domain name ending in .com, .org, or similar."
    )]
    InvalidUrl,

    #[error("Short code length must be at least {min}, got {actual}")]
    UrlLengthTooShort { min: u32, actual: u32 },

    #[error("Page size must be between 1 and {max}, got {actual}")]
    InvalidLimit { max: u32, actual: u32 },
}

/// Errors surfaced by the client core and its adapters.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("No short URL has been copied yet")]
    NothingSelected,

    #[error("Operation cancelled")]
    Cancelled,
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Returns true for failures caused by the remote service or the transport.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Self::http_status(status.as_u16(), e.to_string());
        }
        Self::Network(e.to_string())
    }
}
