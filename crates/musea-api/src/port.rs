//! Port trait implementation for `MuseumClient`.
//!
//! Implements the core-owned `ArtworkCatalogPort`, dispatching on the
//! configured provider and mapping internal errors to port errors.

use async_trait::async_trait;
use musea_core::{
    ArtworkCatalogPort, ArtworkDetail, ArtworkId, CatalogError, CatalogProvider, CatalogResult,
    ImageFilterMode, SearchPage, SearchRequest,
};
use tracing::info;

use crate::client::MuseumClient;
use crate::error::MuseumError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `MuseumError` to core `CatalogError`.
fn map_error(err: MuseumError) -> CatalogError {
    match err {
        err @ (MuseumError::ApiRequestFailed { .. }
        | MuseumError::Timeout { .. }
        | MuseumError::Network(_)) => CatalogError::FetchFailed {
            message: err.to_string(),
        },
        MuseumError::InvalidResponse { message } => CatalogError::InvalidResponse { message },
        MuseumError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
        MuseumError::InvalidUrl(e) => CatalogError::Configuration {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ArtworkCatalogPort for MuseumClient<B> {
    fn provider(&self) -> CatalogProvider {
        self.config.provider
    }

    fn image_filter_mode(&self) -> ImageFilterMode {
        match self.config.provider {
            CatalogProvider::Met => ImageFilterMode::Upstream,
            CatalogProvider::ArtInstitute => ImageFilterMode::Local,
        }
    }

    async fn search(&self, request: &SearchRequest) -> CatalogResult<SearchPage> {
        let result = match self.config.provider {
            CatalogProvider::Met => self.met_search(request).await,
            CatalogProvider::ArtInstitute => self.aic_search(request).await,
        };
        result.map_err(map_error)
    }

    async fn fetch_detail(&self, id: ArtworkId) -> CatalogResult<ArtworkDetail> {
        let result = match self.config.provider {
            CatalogProvider::Met => self.met_object(id).await,
            CatalogProvider::ArtInstitute => self.aic_artwork(id).await,
        };
        result.map_err(map_error)
    }

    async fn clear_cache(&self) {
        let removed = self.cache.clear().await;
        info!(provider = %self.config.provider, removed, "response cache cleared");
    }
}
