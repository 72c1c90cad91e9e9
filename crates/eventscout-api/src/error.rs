//! Error types for the event source client.

use std::fmt;

/// Errors reported by the upstream listing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// The API key was rejected.
    Auth { message: String },
    /// Quota exceeded.
    RateLimit { retry_after: Option<u64> },
    /// Resource not found.
    NotFound { resource: String },
    /// The request was malformed.
    Validation {
        field: Option<String>,
        message: String,
    },
    /// Network/connection error.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "Auth error: {}", message),
            ApiError::RateLimit { retry_after } => match retry_after {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            ApiError::NotFound { resource } => write!(f, "{} not found", resource),
            ApiError::Validation { field, message } => match field {
                Some(f_name) => write!(f, "Validation error on {}: {}", f_name, message),
                None => write!(f, "Validation error: {}", message),
            },
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Top-level error for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service answered with an error status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query parameters could not be encoded.
    #[error("invalid query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    /// Returns the structured API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
