//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a usable response came back
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response arrived but was not in the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Structured error returned by the service (`{ "error": ... }`)
    #[error("{message}")]
    Service { message: String },
}

impl ClientError {
    /// Whether the request never produced a usable service answer.
    ///
    /// Structured service errors are real answers; everything else is a
    /// transport failure and each form degrades to its fallback message.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Service { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
