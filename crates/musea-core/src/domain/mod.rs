//! Domain types shared by the catalog adapters and the view layer.

pub mod artwork;
pub mod filter;
pub mod page_state;
pub mod pagination;
pub mod provider;

pub use artwork::{ArtworkDetail, ArtworkId, ArtworkSummary, ImageRef};
pub use filter::{FilterOptions, apply_filters};
pub use page_state::{DEFAULT_QUERY, PageSize, PageState, PageStateError};
pub use pagination::{
    NavAction, NavControl, Navigation, PaginationInfo, compute_total_pages, slice_page,
};
pub use provider::{CatalogProvider, ImageFilterMode};
