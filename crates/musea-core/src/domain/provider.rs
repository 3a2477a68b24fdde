//! Upstream collection providers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The museum API a catalog talks to.
///
/// Each provider implies a pagination convention: the Met returns a full
/// identifier list that is sliced locally, the Art Institute pages on the
/// server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogProvider {
    /// The Metropolitan Museum of Art Open Access API
    #[default]
    Met,
    /// Art Institute of Chicago public API
    ArtInstitute,
}

impl CatalogProvider {
    /// Short identifier used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::ArtInstitute => "aic",
        }
    }

    /// Human-readable collection name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Met => "The Metropolitan Museum of Art",
            Self::ArtInstitute => "Art Institute of Chicago",
        }
    }
}

impl fmt::Display for CatalogProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "met" | "metmuseum" => Ok(Self::Met),
            "aic" | "artic" | "art-institute" => Ok(Self::ArtInstitute),
            other => Err(format!("unknown provider '{other}' (expected 'met' or 'aic')")),
        }
    }
}

/// Where a provider applies the "only items with images" toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFilterMode {
    /// Sent upstream with the search, so totals already reflect it.
    Upstream,
    /// Applied by the filter stage after items are fetched.
    Local,
}
