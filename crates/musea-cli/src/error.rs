//! CLI-specific error types and mappings.
//!
//! Upstream failures during a render are shown as notices, not errors.
//! `CliError` covers what stops a command outright.

use musea_api::MuseumError;
use musea_core::{FetchFailure, PageStateError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error the parser could not catch.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal, stdout).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (malformed endpoint, client construction).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested record could not be loaded.
    #[error("{0}")]
    Unavailable(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<MuseumError> for CliError {
    fn from(err: MuseumError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PageStateError> for CliError {
    fn from(err: PageStateError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<FetchFailure> for CliError {
    fn from(failure: FetchFailure) -> Self {
        Self::Unavailable(failure.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        Self::Io(err.to_string())
    }
}
