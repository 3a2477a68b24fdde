//! Post-fetch filter predicates.

use serde::{Deserialize, Serialize};

use super::artwork::ArtworkDetail;

/// User-selected predicates applied to fetched items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Keep only items whose image reference resolves to a URL
    pub require_image: bool,
    /// Keep only items explicitly marked public domain
    pub require_public_domain: bool,
}

impl FilterOptions {
    /// No filtering.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            require_image: false,
            require_public_domain: false,
        }
    }

    /// Set the has-image predicate.
    #[must_use]
    pub const fn with_require_image(mut self, enabled: bool) -> Self {
        self.require_image = enabled;
        self
    }

    /// Set the public-domain predicate.
    #[must_use]
    pub const fn with_require_public_domain(mut self, enabled: bool) -> Self {
        self.require_public_domain = enabled;
        self
    }

    /// Whether an item passes every enabled predicate.
    #[must_use]
    pub fn matches(&self, item: &ArtworkDetail) -> bool {
        if self.require_image && !item.summary.has_image() {
            return false;
        }
        if self.require_public_domain && !item.is_public_domain() {
            return false;
        }
        true
    }
}

/// Keep the items that satisfy `options`, in their original order.
#[must_use]
pub fn apply_filters(items: Vec<ArtworkDetail>, options: &FilterOptions) -> Vec<ArtworkDetail> {
    items
        .into_iter()
        .filter(|item| options.matches(item))
        .collect()
}
