//! Museum collection client.
//!
//! One client talks to one provider, fixed at construction. Provider
//! specific calls live in `met` and `aic`; the port implementation in
//! `port.rs` is the only place that picks between them.

mod aic;
mod met;

use std::sync::Arc;

use musea_core::ArtworkCatalogPort;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::cache::ResponseCache;
use crate::config::MuseumClientConfig;
use crate::error::MuseumResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default museum client using the reqwest HTTP backend.
pub type DefaultMuseumClient = MuseumClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for one museum collection API.
///
/// Generic over the HTTP backend so tests can substitute canned bodies.
/// Use [`DefaultMuseumClient`] in production code.
pub struct MuseumClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
    pub(crate) cache: ResponseCache,
}

impl DefaultMuseumClient {
    /// Create a client for the provider named in `config`.
    ///
    /// Fails when an endpoint URL is malformed or the HTTP client cannot be
    /// built.
    pub fn new(config: &MuseumClientConfig) -> MuseumResult<Self> {
        let internal_config = ApiConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            cache: ResponseCache::new(internal_config.cache_responses),
            config: internal_config,
        })
    }
}

/// Build a catalog port for the configured provider.
pub fn build_catalog(config: &MuseumClientConfig) -> MuseumResult<Arc<dyn ArtworkCatalogPort>> {
    Ok(Arc::new(DefaultMuseumClient::new(config)?))
}

impl<B: HttpBackend> MuseumClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self {
            backend,
            cache: ResponseCache::new(config.cache_responses),
            config,
        }
    }

    /// GET `url` through the response cache and decode the body.
    ///
    /// A body is cached only after it decoded into `T`.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> MuseumResult<T> {
        if let Some(body) = self.cache.get(url.as_str()).await {
            debug!(url = %url, "cache hit");
            return Ok(serde_json::from_value(body)?);
        }

        debug!(url = %url, "GET");
        let body: Value = self.backend.get_json(url).await?;
        let parsed = T::deserialize(&body)?;
        self.cache.insert(url.as_str(), body).await;
        Ok(parsed)
    }
}
