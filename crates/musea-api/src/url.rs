//! URL construction helpers for the museum APIs.
//!
//! Pure functions, so every request the client makes can be checked
//! without a network.

use musea_core::{ArtworkId, SearchRequest};
use url::Url;

use crate::models::ApiConfig;

/// Fields requested on AIC search results.
pub const AIC_SEARCH_FIELDS: &[&str] = &[
    "id",
    "title",
    "artist_display",
    "date_display",
    "image_id",
    "medium_display",
    "place_of_origin",
    "is_public_domain",
];

/// Fields requested on a single AIC artwork.
pub const AIC_DETAIL_FIELDS: &[&str] = &[
    "id",
    "title",
    "artist_display",
    "date_display",
    "image_id",
    "medium_display",
    "place_of_origin",
    "is_public_domain",
    "provenance_text",
    "dimensions",
    "classification_title",
    "credit_line",
];

/// IIIF region/size/rotation/quality suffix for a card-sized rendition.
const IIIF_SUFFIX: &str = "full/843,/0/default.jpg";

/// AIC caps `limit` at 100.
const AIC_MAX_LIMIT: u32 = 100;

/// Append `segment` to the path of `base`.
fn join_segment(base: &Url, segment: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{segment}"));
    url
}

/// Build the Met search URL: `?q=<query>[&hasImages=true]`.
pub fn build_met_search_url(config: &ApiConfig, query: &str, images_only: bool) -> Url {
    let mut url = config.search_url.clone();
    let mut query_string = format!("q={}", urlencoding::encode(query));
    if images_only {
        query_string.push_str("&hasImages=true");
    }
    url.set_query(Some(&query_string));
    url
}

/// Build the Met object URL: `<objects>/<id>`.
pub fn build_met_object_url(config: &ApiConfig, id: ArtworkId) -> Url {
    join_segment(&config.object_url, &id.to_string())
}

/// Build the AIC search URL with server-side paging.
pub fn build_aic_search_url(config: &ApiConfig, request: &SearchRequest) -> Url {
    let mut url = config.search_url.clone();
    let query_string = format!(
        "q={}&page={}&limit={}&fields={}",
        urlencoding::encode(&request.query),
        request.page.max(1),
        request.page_size.clamp(1, AIC_MAX_LIMIT),
        AIC_SEARCH_FIELDS.join(",")
    );
    url.set_query(Some(&query_string));
    url
}

/// Build the AIC artwork URL: `<artworks>/<id>?fields=...`.
pub fn build_aic_artwork_url(config: &ApiConfig, id: ArtworkId) -> Url {
    let mut url = join_segment(&config.object_url, &id.to_string());
    url.set_query(Some(&format!("fields={}", AIC_DETAIL_FIELDS.join(","))));
    url
}

/// Build a IIIF image URL from an AIC `image_id`.
pub fn build_iiif_image_url(config: &ApiConfig, image_id: &str) -> String {
    let base = config.image_service_url.as_str().trim_end_matches('/');
    format!("{base}/{}/{IIIF_SUFFIX}", urlencoding::encode(image_id))
}

/// Build the human-browsable page URL for an artwork.
pub fn build_web_url(config: &ApiConfig, id: ArtworkId) -> String {
    join_segment(&config.web_url, &id.to_string()).to_string()
}
