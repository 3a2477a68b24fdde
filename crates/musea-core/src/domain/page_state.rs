//! Session state owned by the view layer.
//!
//! The core reads a [`PageState`] as an immutable request parameter and
//! never writes it back. Helpers here return new values instead of mutating.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::artwork::ArtworkId;

/// Query used when the view has no stored query yet.
pub const DEFAULT_QUERY: &str = "bird";

/// Errors from building page state out of user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageStateError {
    /// Page size is not one of the supported grid sizes.
    #[error("Unsupported page size {0}; expected one of 9, 12, 15, 18, 21, 24")]
    UnsupportedPageSize(u32),

    /// Page numbers start at 1.
    #[error("Page must be at least 1")]
    PageOutOfRange,
}

/// Number of cards per page. Always a multiple of the three-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    /// 9 cards
    Nine,
    /// 12 cards
    #[default]
    Twelve,
    /// 15 cards
    Fifteen,
    /// 18 cards
    Eighteen,
    /// 21 cards
    TwentyOne,
    /// 24 cards
    TwentyFour,
}

impl PageSize {
    /// Every supported size, smallest first.
    pub const ALL: [Self; 6] = [
        Self::Nine,
        Self::Twelve,
        Self::Fifteen,
        Self::Eighteen,
        Self::TwentyOne,
        Self::TwentyFour,
    ];

    /// Number of items per page.
    #[must_use]
    pub const fn get(self) -> u32 {
        match self {
            Self::Nine => 9,
            Self::Twelve => 12,
            Self::Fifteen => 15,
            Self::Eighteen => 18,
            Self::TwentyOne => 21,
            Self::TwentyFour => 24,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageStateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(PageStateError::UnsupportedPageSize(value))
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = PageStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| PageStateError::UnsupportedPageSize(0))?;
        Self::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Query, page and selection for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Keyword query
    pub query: String,
    /// Current page, starting at 1
    pub page: u32,
    /// Items per page
    pub page_size: PageSize,
    /// Artwork opened in the detail view
    pub selected_id: Option<ArtworkId>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            page: 1,
            page_size: PageSize::default(),
            selected_id: None,
        }
    }
}

impl PageState {
    /// Start a session for a query on page 1.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Same state on another page.
    ///
    /// # Errors
    ///
    /// Returns [`PageStateError::PageOutOfRange`] for page 0.
    pub fn with_page(&self, page: u32) -> Result<Self, PageStateError> {
        if page == 0 {
            return Err(PageStateError::PageOutOfRange);
        }
        Ok(Self {
            page,
            ..self.clone()
        })
    }

    /// New query; resets to page 1 and clears the selection.
    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            selected_id: None,
            ..self.clone()
        }
    }

    /// New page size; resets to page 1 since old page numbers no longer line up.
    #[must_use]
    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page_size,
            page: 1,
            ..self.clone()
        }
    }

    /// Open or close the detail view.
    #[must_use]
    pub fn with_selection(&self, selected_id: Option<ArtworkId>) -> Self {
        Self {
            selected_id,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_conversions() {
        assert_eq!(PageSize::try_from(9), Ok(PageSize::Nine));
        assert_eq!(PageSize::try_from(24), Ok(PageSize::TwentyFour));
        assert_eq!(
            PageSize::try_from(10),
            Err(PageStateError::UnsupportedPageSize(10))
        );
        assert_eq!("18".parse::<PageSize>(), Ok(PageSize::Eighteen));
        assert!("twelve".parse::<PageSize>().is_err());
        assert_eq!(u32::from(PageSize::Fifteen), 15);
    }

    #[test]
    fn test_page_size_serde_as_number() {
        let json = serde_json::to_string(&PageSize::TwentyOne).unwrap();
        assert_eq!(json, "21");
        let size: PageSize = serde_json::from_str("12").unwrap();
        assert_eq!(size, PageSize::Twelve);
        assert!(serde_json::from_str::<PageSize>("13").is_err());
    }

    #[test]
    fn test_default_state() {
        let state = PageState::default();
        assert_eq!(state.query, "bird");
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, PageSize::Twelve);
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn test_state_helpers_do_not_mutate() {
        let state = PageState::new("cat").with_page(4).unwrap();
        let selected = state.with_selection(Some(99));

        assert_eq!(state.selected_id, None);
        assert_eq!(selected.selected_id, Some(99));
        assert_eq!(selected.page, 4);

        let requery = selected.with_query("dog");
        assert_eq!(requery.page, 1);
        assert_eq!(requery.selected_id, None);
        assert_eq!(selected.query, "cat");

        let resized = state.with_page_size(PageSize::TwentyFour);
        assert_eq!(resized.page, 1);
        assert_eq!(resized.page_size, PageSize::TwentyFour);
    }

    #[test]
    fn test_page_zero_rejected() {
        let state = PageState::default();
        assert_eq!(state.with_page(0), Err(PageStateError::PageOutOfRange));
    }
}
