//! Degradable results for calls that must never break a render.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ArtworkId;
use crate::ports::CatalogError;

/// The call a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum FetchOperation {
    /// A search call
    Search,
    /// A detail fetch for one artwork
    Detail {
        /// Artwork being fetched
        id: ArtworkId,
    },
}

/// A failed upstream call, kept as data so the view can surface it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    /// Which call failed
    #[serde(flatten)]
    pub operation: FetchOperation,
    /// Human-readable reason
    pub message: String,
}

impl FetchFailure {
    /// Failure of a search call.
    pub fn search(err: &CatalogError) -> Self {
        Self {
            operation: FetchOperation::Search,
            message: err.to_string(),
        }
    }

    /// Failure of a detail fetch.
    pub fn detail(id: ArtworkId, err: &CatalogError) -> Self {
        Self {
            operation: FetchOperation::Detail { id },
            message: err.to_string(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            FetchOperation::Search => write!(f, "Search failed: {}", self.message),
            FetchOperation::Detail { id } => {
                write!(f, "Failed to load details for {id}: {}", self.message)
            }
        }
    }
}

/// Either the data or the reason it could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// The call succeeded
    Loaded(T),
    /// The call failed and the caller should degrade
    Failed(FetchFailure),
}

impl<T> FetchOutcome<T> {
    /// The loaded value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// The failure, if any.
    pub const fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Whether the call succeeded.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Split into a value (or `fallback` on failure) and the optional failure.
    pub fn into_parts(self, fallback: impl FnOnce() -> T) -> (T, Option<FetchFailure>) {
        match self {
            Self::Loaded(value) => (value, None),
            Self::Failed(failure) => (fallback(), Some(failure)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed() -> CatalogError {
        CatalogError::FetchFailed {
            message: "HTTP 503".to_string(),
        }
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            FetchFailure::search(&failed()).to_string(),
            "Search failed: HTTP 503"
        );
        assert_eq!(
            FetchFailure::detail(12, &failed()).to_string(),
            "Failed to load details for 12: HTTP 503"
        );
    }

    #[test]
    fn test_outcome_into_parts() {
        let loaded: FetchOutcome<Vec<u32>> = FetchOutcome::Loaded(vec![1]);
        assert_eq!(loaded.into_parts(Vec::new), (vec![1], None));

        let degraded: FetchOutcome<Vec<u32>> =
            FetchOutcome::Failed(FetchFailure::search(&failed()));
        let (value, failure) = degraded.into_parts(Vec::new);
        assert!(value.is_empty());
        assert_eq!(failure.unwrap().operation, FetchOperation::Search);
    }

    #[test]
    fn test_failure_serializes_with_operation() {
        let json = serde_json::to_value(FetchFailure::detail(3, &failed())).unwrap();
        assert_eq!(json["operation"], "detail");
        assert_eq!(json["id"], 3);
        assert_eq!(json["message"], "HTTP 503");
    }
}
