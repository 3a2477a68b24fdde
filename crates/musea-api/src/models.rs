//! Internal API response types for the museum collection APIs.
//!
//! These types mirror the upstream JSON and never leave `musea-api`.
//! External consumers use the domain types defined in `musea-core`.

use std::time::Duration;

use musea_core::{ArtworkId, CatalogProvider};
use serde::Deserialize;
use url::Url;

use crate::config::MuseumClientConfig;
use crate::error::MuseumResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration with every endpoint parsed up front.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub provider: CatalogProvider,
    pub search_url: Url,
    pub object_url: Url,
    pub image_service_url: Url,
    pub web_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub cache_responses: bool,
}

impl ApiConfig {
    /// Parse the public configuration, failing on the first malformed URL.
    pub fn from_public(config: &MuseumClientConfig) -> MuseumResult<Self> {
        Ok(Self {
            provider: config.provider,
            search_url: Url::parse(&config.search_url)?,
            object_url: Url::parse(&config.object_url)?,
            image_service_url: Url::parse(&config.image_service_url)?,
            web_url: Url::parse(&config.web_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            cache_responses: config.cache_responses,
        })
    }
}

// ============================================================================
// Metropolitan Museum of Art
// ============================================================================

/// Body of the Met search endpoint.
///
/// `objectIDs` is `null` when nothing matches. The `total` field is ignored
/// in favour of the id count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetSearchResponse {
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<ArtworkId>>,
}

/// Body of the Met object endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetObject {
    #[serde(rename = "objectID")]
    pub object_id: Option<ArtworkId>,
    pub title: Option<String>,
    pub artist_display_name: Option<String>,
    pub object_date: Option<String>,
    pub culture: Option<String>,
    pub medium: Option<String>,
    pub primary_image: Option<String>,
    pub primary_image_small: Option<String>,
    pub is_public_domain: Option<bool>,
    pub dimensions: Option<String>,
    pub classification: Option<String>,
    pub credit_line: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "objectURL")]
    pub object_url: Option<String>,
}

// ============================================================================
// Art Institute of Chicago
// ============================================================================

/// Body of the AIC search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AicSearchResponse {
    pub data: Vec<AicArtwork>,
    pub pagination: AicPagination,
}

/// Server-side pagination block.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AicPagination {
    pub total: u64,
    pub total_pages: u32,
}

/// Body of the AIC artwork endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AicArtworkResponse {
    pub data: AicArtwork,
}

/// One artwork record, restricted to the requested `fields`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AicArtwork {
    pub id: Option<ArtworkId>,
    pub title: Option<String>,
    pub artist_display: Option<String>,
    pub date_display: Option<String>,
    pub image_id: Option<String>,
    pub medium_display: Option<String>,
    pub place_of_origin: Option<String>,
    pub is_public_domain: Option<bool>,
    pub provenance_text: Option<String>,
    pub dimensions: Option<String>,
    pub classification_title: Option<String>,
    pub credit_line: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_config_rejects_bad_url() {
        let config = MuseumClientConfig::met().with_search_url("::not a url::");
        assert!(ApiConfig::from_public(&config).is_err());
    }

    #[test]
    fn test_met_search_null_ids() {
        let body: MetSearchResponse =
            serde_json::from_value(json!({"total": 0, "objectIDs": null})).unwrap();
        assert!(body.object_ids.is_none());
    }

    #[test]
    fn test_met_object_ignores_unknown_fields() {
        let object: MetObject = serde_json::from_value(json!({
            "objectID": 436_535,
            "title": "Wheat Field with Cypresses",
            "artistDisplayName": "Vincent van Gogh",
            "primaryImageSmall": "https://images.metmuseum.org/small.jpg",
            "isPublicDomain": true,
            "tags": [{"term": "Landscapes"}],
            "GalleryNumber": "822"
        }))
        .unwrap();

        assert_eq!(object.object_id, Some(436_535));
        assert_eq!(object.artist_display_name.as_deref(), Some("Vincent van Gogh"));
        assert_eq!(object.is_public_domain, Some(true));
        assert!(object.culture.is_none());
    }

    #[test]
    fn test_aic_search_tolerates_nulls_and_missing_pagination() {
        let body: AicSearchResponse = serde_json::from_value(json!({
            "data": [{"id": 27992, "title": "A Sunday on La Grande Jatte", "image_id": null}]
        }))
        .unwrap();

        assert_eq!(body.data.len(), 1);
        assert!(body.data[0].image_id.is_none());
        assert_eq!(body.pagination.total, 0);
    }
}
