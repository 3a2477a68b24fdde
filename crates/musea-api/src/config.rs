//! Public configuration for the museum API client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config (parsed URLs) is derived from this.

use std::time::Duration;

use musea_core::CatalogProvider;

const MET_SEARCH_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1/search";
const MET_OBJECT_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1/objects";
const MET_WEB_URL: &str = "https://www.metmuseum.org/art/collection/search";

const AIC_SEARCH_URL: &str = "https://api.artic.edu/api/v1/artworks/search";
const AIC_ARTWORK_URL: &str = "https://api.artic.edu/api/v1/artworks";
const AIC_WEB_URL: &str = "https://www.artic.edu/artworks";

/// Base of the IIIF image service used to template `image_id`s.
pub(crate) const AIC_IMAGE_SERVICE_URL: &str = "https://www.artic.edu/iiif/2";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration for the museum API client.
///
/// Pick a provider with [`MuseumClientConfig::for_provider`] and override
/// individual endpoints with the builder methods.
///
/// # Example
///
/// ```
/// use musea_api::MuseumClientConfig;
/// use std::time::Duration;
///
/// let config = MuseumClientConfig::art_institute()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct MuseumClientConfig {
    /// Upstream provider (decides the pagination convention)
    pub(crate) provider: CatalogProvider,
    /// Search endpoint
    pub(crate) search_url: String,
    /// Object/artwork endpoint; the id is appended as a path segment
    pub(crate) object_url: String,
    /// IIIF image service base
    pub(crate) image_service_url: String,
    /// Human-browsable page base; the id is appended as a path segment
    pub(crate) web_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Memoize successful responses until the cache is cleared
    pub(crate) cache_responses: bool,
}

impl Default for MuseumClientConfig {
    fn default() -> Self {
        Self::met()
    }
}

impl MuseumClientConfig {
    /// Default configuration for a provider.
    #[must_use]
    pub fn for_provider(provider: CatalogProvider) -> Self {
        match provider {
            CatalogProvider::Met => Self::met(),
            CatalogProvider::ArtInstitute => Self::art_institute(),
        }
    }

    /// Metropolitan Museum of Art endpoints.
    #[must_use]
    pub fn met() -> Self {
        Self::with_endpoints(
            CatalogProvider::Met,
            MET_SEARCH_URL,
            MET_OBJECT_URL,
            MET_WEB_URL,
        )
    }

    /// Art Institute of Chicago endpoints.
    #[must_use]
    pub fn art_institute() -> Self {
        Self::with_endpoints(
            CatalogProvider::ArtInstitute,
            AIC_SEARCH_URL,
            AIC_ARTWORK_URL,
            AIC_WEB_URL,
        )
    }

    fn with_endpoints(
        provider: CatalogProvider,
        search_url: &str,
        object_url: &str,
        web_url: &str,
    ) -> Self {
        Self {
            provider,
            search_url: search_url.to_string(),
            object_url: object_url.to_string(),
            image_service_url: AIC_IMAGE_SERVICE_URL.to_string(),
            web_url: web_url.to_string(),
            user_agent: concat!("musea-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_responses: true,
        }
    }

    /// Provider this configuration targets.
    #[must_use]
    pub const fn provider(&self) -> CatalogProvider {
        self.provider
    }

    /// Set the search endpoint.
    #[must_use]
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Set the object/artwork endpoint.
    #[must_use]
    pub fn with_object_url(mut self, url: impl Into<String>) -> Self {
        self.object_url = url.into();
        self
    }

    /// Set the IIIF image service base.
    #[must_use]
    pub fn with_image_service_url(mut self, url: impl Into<String>) -> Self {
        self.image_service_url = url.into();
        self
    }

    /// Set the base of the human-browsable artwork pages.
    #[must_use]
    pub fn with_web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 20 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable response memoization.
    ///
    /// Enabled by default.
    #[must_use]
    pub const fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_responses = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_met() {
        let config = MuseumClientConfig::default();
        assert_eq!(config.provider, CatalogProvider::Met);
        assert_eq!(config.search_url, MET_SEARCH_URL);
        assert!(config.user_agent.contains("musea-api"));
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(config.cache_responses);
    }

    #[test]
    fn test_for_provider() {
        let config = MuseumClientConfig::for_provider(CatalogProvider::ArtInstitute);
        assert_eq!(config.provider(), CatalogProvider::ArtInstitute);
        assert_eq!(config.search_url, AIC_SEARCH_URL);
        assert_eq!(config.object_url, AIC_ARTWORK_URL);
        assert_eq!(config.web_url, AIC_WEB_URL);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MuseumClientConfig::met()
            .with_search_url("http://localhost:9000/search")
            .with_object_url("http://localhost:9000/objects")
            .with_web_url("http://localhost:9000/web")
            .with_image_service_url("http://localhost:9000/iiif")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_cache(false);

        assert_eq!(config.search_url, "http://localhost:9000/search");
        assert_eq!(config.object_url, "http://localhost:9000/objects");
        assert_eq!(config.web_url, "http://localhost:9000/web");
        assert_eq!(config.image_service_url, "http://localhost:9000/iiif");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.cache_responses);
    }
}
