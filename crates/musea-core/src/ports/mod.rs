//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod catalog;

pub use catalog::{
    ArtworkCatalogPort, CatalogError, CatalogResult, SearchHit, SearchPage, SearchRequest,
};
