//! Artwork catalog port trait.

use async_trait::async_trait;

use super::error::CatalogResult;
use super::types::{SearchPage, SearchRequest};
use crate::domain::{ArtworkDetail, ArtworkId, CatalogProvider, ImageFilterMode};

/// Port trait for a museum collection API.
///
/// The implementation lives in `musea-api`; one implementation per
/// configured provider, chosen when the client is built.
///
/// # Design
///
/// - Uses core-owned DTOs, not upstream response types
/// - Returns [`super::CatalogError`] for all failures; degrading to empty
///   results is the caller's job
/// - No implementation details leak through this interface
#[async_trait]
pub trait ArtworkCatalogPort: Send + Sync {
    /// Provider this catalog talks to.
    fn provider(&self) -> CatalogProvider;

    /// Where the images-only toggle is applied for this provider.
    fn image_filter_mode(&self) -> ImageFilterMode;

    /// Search for one page of artworks.
    async fn search(&self, request: &SearchRequest) -> CatalogResult<SearchPage>;

    /// Fetch full metadata for one artwork.
    async fn fetch_detail(&self, id: ArtworkId) -> CatalogResult<ArtworkDetail>;

    /// Drop memoized responses so the next call goes to the network.
    async fn clear_cache(&self);
}
