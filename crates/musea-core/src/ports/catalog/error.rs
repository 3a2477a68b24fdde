//! Error types for catalog port operations.

use thiserror::Error;

/// Errors from catalog port operations.
///
/// Transport failures, timeouts and non-2xx responses all collapse into
/// [`CatalogError::FetchFailed`]; the adapter does not preserve the
/// difference past this boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The upstream call did not produce a usable response.
    #[error("{message}")]
    FetchFailed {
        /// Description of the failure
        message: String,
    },

    /// The upstream answered but the body could not be understood.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter is misconfigured (bad base URL and similar).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for catalog port operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
