#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    ArtworkDetail, ArtworkId, ArtworkSummary, CatalogProvider, DEFAULT_QUERY, FilterOptions,
    ImageFilterMode, ImageRef, NavAction, NavControl, Navigation, PageSize, PageState,
    PageStateError, PaginationInfo, apply_filters, compute_total_pages, slice_page,
};
pub use ports::{
    ArtworkCatalogPort, CatalogError, CatalogResult, SearchHit, SearchPage, SearchRequest,
};
pub use services::{BrowsePage, BrowseService, FetchFailure, FetchOperation, FetchOutcome};
