//! Pagination arithmetic and navigation clamping.

use serde::{Deserialize, Serialize};

/// Total page count for a result set.
///
/// Never less than 1, so "page X of Y" stays well-formed for empty results.
/// A zero page size is treated as 1.
#[must_use]
pub fn compute_total_pages(total_items: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total_items.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Client-side page window over a full item list.
///
/// Pages start at 1 (page 0 is read as page 1). A window past the end yields
/// an empty slice, a partial window yields what is left.
#[must_use]
pub fn slice_page<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    let size = page_size as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Result-set size for one request. Recomputed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Number of matching items
    pub total_items: u64,
    /// Number of pages, at least 1
    pub total_pages: u32,
}

impl PaginationInfo {
    /// Pagination for an empty result.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_items: 0,
            total_pages: 1,
        }
    }

    /// Derive pagination from a locally known item count.
    #[must_use]
    pub fn from_total(total_items: u64, page_size: u32) -> Self {
        Self {
            total_items,
            total_pages: compute_total_pages(total_items, page_size),
        }
    }

    /// Pagination reported by a server, floored at one page.
    #[must_use]
    pub fn from_server(total_items: u64, total_pages: u32) -> Self {
        Self {
            total_items,
            total_pages: total_pages.max(1),
        }
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self::empty()
    }
}

/// A pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Jump to page 1
    First,
    /// One page back
    Previous,
    /// One page forward
    Next,
}

/// Target and enablement of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavControl {
    /// Page the control leads to
    pub target: u32,
    /// Disabled controls are no-ops
    pub enabled: bool,
}

/// First/previous/next controls for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    /// Page the controls were computed for
    pub current_page: u32,
    /// Total pages they were computed against
    pub total_pages: u32,
    /// "First" control
    pub first: NavControl,
    /// "Previous" control
    pub previous: NavControl,
    /// "Next" control
    pub next: NavControl,
}

impl Navigation {
    /// Compute the controls for `current_page` out of `total_pages`.
    #[must_use]
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        let at_start = current_page <= 1;

        Self {
            current_page,
            total_pages,
            first: NavControl {
                target: 1,
                enabled: !at_start,
            },
            previous: NavControl {
                target: current_page.saturating_sub(1).max(1),
                enabled: !at_start,
            },
            next: NavControl {
                target: current_page.saturating_add(1).min(total_pages),
                enabled: current_page < total_pages,
            },
        }
    }

    /// The control for an action.
    #[must_use]
    pub const fn control(&self, action: NavAction) -> NavControl {
        match action {
            NavAction::First => self.first,
            NavAction::Previous => self.previous,
            NavAction::Next => self.next,
        }
    }

    /// Page to move to, or `None` when the control is disabled.
    #[must_use]
    pub const fn target(&self, action: NavAction) -> Option<u32> {
        let control = self.control(action);
        if control.enabled {
            Some(control.target)
        } else {
            None
        }
    }
}
