//! Catalog port definitions.
//!
//! This module defines the port trait and DTOs for museum API interaction.
//! The actual implementation lives in `musea-api`.

mod client;
mod error;
mod types;

pub use client::ArtworkCatalogPort;
pub use error::{CatalogError, CatalogResult};
pub use types::{SearchHit, SearchPage, SearchRequest};
