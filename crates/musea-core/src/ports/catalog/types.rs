//! Core-owned DTOs for catalog searches.
//!
//! These types cross the boundary between `musea-api` and consumers. They
//! carry only what the browse layer needs, not upstream response shapes.

use serde::{Deserialize, Serialize};

use crate::domain::{ArtworkDetail, ArtworkId, PageState, PaginationInfo};

/// Parameters for one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Keyword query
    pub query: String,
    /// Page number, starting at 1
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Ask for items with images only
    pub images_only: bool,
}

impl SearchRequest {
    /// Create a request for page 1 with the default page size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            page_size: 12,
            images_only: false,
        }
    }

    /// Build the request for the page described by the view state.
    #[must_use]
    pub fn from_page_state(state: &PageState, images_only: bool) -> Self {
        Self {
            query: state.query.clone(),
            page: state.page.max(1),
            page_size: state.page_size.get(),
            images_only,
        }
    }

    /// Set the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the images-only flag.
    #[must_use]
    pub const fn with_images_only(mut self, images_only: bool) -> Self {
        self.images_only = images_only;
        self
    }
}

/// One entry of a search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SearchHit {
    /// Only an identifier; a detail fetch is needed to show anything.
    Id(ArtworkId),
    /// Already populated by the search response.
    Record(Box<ArtworkDetail>),
}

impl SearchHit {
    /// Identifier of the hit.
    #[must_use]
    pub fn id(&self) -> ArtworkId {
        match self {
            Self::Id(id) => *id,
            Self::Record(detail) => detail.id(),
        }
    }
}

/// A page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchPage {
    /// Hits for the requested page, in upstream order
    pub hits: Vec<SearchHit>,
    /// Result-set size
    pub pagination: PaginationInfo,
}

impl SearchPage {
    /// An empty page: no hits, zero items, one page.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the page has no hits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
