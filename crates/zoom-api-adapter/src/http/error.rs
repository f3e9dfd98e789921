/*
[INPUT]:  Error sources (transport, signing, status codes, JSON decoding)
[OUTPUT]: Structured error types carrying endpoint context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::SigningError;

/// Main error type for the Zoom adapter
#[derive(Error, Debug)]
pub enum ZoomError {
    /// Connection-level failure; never retried
    #[error("HTTP request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// No token could be signed before the first send
    #[error("Unable to get auth token: {source}")]
    Authentication {
        #[source]
        source: SigningError,
    },

    /// Re-signing after a 401 failed
    #[error("Unable to refresh auth token: {source}")]
    TokenRefresh {
        #[source]
        source: SigningError,
    },

    /// Server answered with a non-success status
    #[error("API error from {endpoint} (status {status}): {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Success body did not match the expected shape
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`ZoomError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Auth,
    Status,
    Decode,
    Other,
}

impl ZoomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZoomError::Http { .. } => ErrorKind::Transport,
            ZoomError::Authentication { .. } | ZoomError::TokenRefresh { .. } => ErrorKind::Auth,
            ZoomError::Api { .. } => ErrorKind::Status,
            ZoomError::Decode { .. } => ErrorKind::Decode,
            ZoomError::Serialization(_) | ZoomError::UrlParse(_) | ZoomError::Config(_) => {
                ErrorKind::Other
            }
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ZoomError::Api { status, .. } => Some(*status),
            ZoomError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the error is worth retrying at a higher level.
    ///
    /// The pipeline itself never retries these.
    pub fn is_retryable(&self) -> bool {
        match self {
            ZoomError::Http { source, .. } => source.is_timeout() || source.is_connect(),
            ZoomError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Auth)
            || matches!(self, ZoomError::Api { status: 401, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ZoomError::Api { status: 404, .. })
    }

    /// Create an API error from status code and body text
    pub fn api_error(endpoint: impl Into<String>, status: StatusCode, body: impl Into<String>) -> Self {
        ZoomError::Api {
            endpoint: endpoint.into(),
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for Zoom adapter operations
pub type Result<T> = std::result::Result<T, ZoomError>;
