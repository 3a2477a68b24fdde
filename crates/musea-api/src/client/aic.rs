//! Art Institute of Chicago calls.
//!
//! Search is paged server-side and already carries card fields, so no
//! per-card fetch is needed. Image filtering happens locally: the search
//! endpoint is never asked to restrict to images.

use musea_core::{ArtworkDetail, ArtworkId, SearchPage, SearchRequest};

use super::MuseumClient;
use crate::error::{MuseumError, MuseumResult};
use crate::http::HttpBackend;
use crate::models::{AicArtworkResponse, AicSearchResponse};
use crate::parsing::{parse_aic_artwork, parse_aic_search};
use crate::url::{build_aic_artwork_url, build_aic_search_url};

impl<B: HttpBackend> MuseumClient<B> {
    /// Fetch one server-side page of records.
    pub(crate) async fn aic_search(&self, request: &SearchRequest) -> MuseumResult<SearchPage> {
        let url = build_aic_search_url(&self.config, request);
        let response: AicSearchResponse = self.fetch_json(&url).await?;
        Ok(parse_aic_search(response, &self.config))
    }

    /// Fetch one artwork with the detail field set.
    pub(crate) async fn aic_artwork(&self, id: ArtworkId) -> MuseumResult<ArtworkDetail> {
        let url = build_aic_artwork_url(&self.config, id);
        let response: AicArtworkResponse = self.fetch_json(&url).await?;
        parse_aic_artwork(response.data, &self.config).ok_or_else(|| {
            MuseumError::InvalidResponse {
                message: format!("artwork {id} has no id"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::aic_config;
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use musea_core::SearchHit;
    use serde_json::json;

    #[tokio::test]
    async fn test_aic_search_pages_server_side() {
        let backend = FakeBackend::new().with_json(
            "/artworks/search",
            json!({
                "pagination": {"total": 30, "total_pages": 3},
                "data": [{"id": 1, "title": "One"}, {"id": 2, "title": "Two"}]
            }),
        );
        let client = MuseumClient::with_backend(aic_config(), backend.clone());
        let request = SearchRequest::new("cats")
            .with_page(2)
            .with_images_only(true);

        let page = client.aic_search(&request).await.unwrap();

        assert_eq!(page.hits.len(), 2);
        assert!(matches!(page.hits[0], SearchHit::Record(_)));
        assert_eq!(page.pagination.total_pages, 3);

        let sent = &backend.requests()[0];
        assert!(sent.contains("page=2"));
        assert!(!sent.contains("hasImages"));
    }

    #[tokio::test]
    async fn test_aic_artwork() {
        let backend = FakeBackend::new().with_json(
            "/artworks/27992",
            json!({"data": {
                "id": 27992,
                "title": "A Sunday on La Grande Jatte",
                "image_id": "2d484387",
                "is_public_domain": true
            }}),
        );
        let client = MuseumClient::with_backend(aic_config(), backend);

        let detail = client.aic_artwork(27992).await.unwrap();

        assert_eq!(detail.id(), 27992);
        assert!(detail.summary.has_image());
    }

    #[tokio::test]
    async fn test_aic_artwork_http_error() {
        let backend = FakeBackend::new().with_response("/artworks/4", CannedResponse::Status(404));
        let client = MuseumClient::with_backend(aic_config(), backend);

        let result = client.aic_artwork(4).await;

        assert!(matches!(
            result,
            Err(MuseumError::ApiRequestFailed { status: 404, .. })
        ));
    }
}
