//! Internal error types for museum API operations.
//!
//! These errors stay inside `musea-api` and are mapped to core port errors
//! at the boundary.

use thiserror::Error;

/// Result type alias for museum API operations.
pub type MuseumResult<T> = Result<T, MuseumError>;

/// Errors raised while talking to a museum collection API.
#[derive(Debug, Error)]
pub enum MuseumError {
    /// API request failed with an HTTP error status.
    #[error("HTTP {status} from {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// The URL that was requested
        url: String,
    },

    /// API returned a body that does not look like a collection record.
    #[error("invalid response: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("malformed JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}
