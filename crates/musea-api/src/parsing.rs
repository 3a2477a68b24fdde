//! Conversion from upstream response bodies into domain records.
//!
//! Empty and whitespace-only strings are treated as absent everywhere.

use musea_core::{
    ArtworkDetail, ArtworkId, ArtworkSummary, ImageRef, PaginationInfo, SearchHit, SearchPage,
    SearchRequest, slice_page,
};

use crate::error::{MuseumError, MuseumResult};
use crate::models::{AicArtwork, AicSearchResponse, ApiConfig, MetObject, MetSearchResponse};
use crate::url::{build_iiif_image_url, build_web_url};

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ============================================================================
// Metropolitan Museum of Art
// ============================================================================

/// Cut the requested page out of the full id list.
///
/// A `null` id list is an empty result, not an error.
pub fn parse_met_search(response: MetSearchResponse, request: &SearchRequest) -> SearchPage {
    let ids = response.object_ids.unwrap_or_default();
    if ids.is_empty() {
        return SearchPage::empty();
    }

    let hits = slice_page(&ids, request.page, request.page_size)
        .iter()
        .copied()
        .map(SearchHit::Id)
        .collect();

    SearchPage {
        hits,
        pagination: PaginationInfo::from_total(ids.len() as u64, request.page_size),
    }
}

/// Convert a Met object body.
///
/// The small rendition is preferred over the full-size image.
pub fn parse_met_object(
    object: MetObject,
    config: &ApiConfig,
    requested: ArtworkId,
) -> MuseumResult<ArtworkDetail> {
    let id = object.object_id.ok_or_else(|| MuseumError::InvalidResponse {
        message: format!("object {requested} has no objectID"),
    })?;

    let image = non_empty(object.primary_image_small)
        .or_else(|| non_empty(object.primary_image))
        .map(ImageRef::direct);

    let web_url = non_empty(object.object_url).unwrap_or_else(|| build_web_url(config, id));

    let place_of_origin = [non_empty(object.city), non_empty(object.country)]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    Ok(ArtworkDetail {
        summary: ArtworkSummary {
            id,
            title: non_empty(object.title),
            artist: non_empty(object.artist_display_name),
            date_display: non_empty(object.object_date),
            image,
            medium: non_empty(object.medium),
            culture: non_empty(object.culture),
            web_url: Some(web_url),
        },
        provenance: None,
        dimensions: non_empty(object.dimensions),
        classification: non_empty(object.classification),
        place_of_origin: non_empty(Some(place_of_origin)),
        credit_line: non_empty(object.credit_line),
        is_public_domain: object.is_public_domain,
    })
}

// ============================================================================
// Art Institute of Chicago
// ============================================================================

/// Convert an AIC search body. Records without an id are dropped.
pub fn parse_aic_search(response: AicSearchResponse, config: &ApiConfig) -> SearchPage {
    let hits = response
        .data
        .into_iter()
        .filter_map(|artwork| parse_aic_artwork(artwork, config))
        .map(|detail| SearchHit::Record(Box::new(detail)))
        .collect();

    SearchPage {
        hits,
        pagination: PaginationInfo::from_server(
            response.pagination.total,
            response.pagination.total_pages,
        ),
    }
}

/// Convert one AIC artwork record; `None` when it carries no id.
pub fn parse_aic_artwork(artwork: AicArtwork, config: &ApiConfig) -> Option<ArtworkDetail> {
    let id = artwork.id?;

    let image = non_empty(artwork.image_id).map(|image_id| {
        let url = build_iiif_image_url(config, &image_id);
        ImageRef::iiif(image_id, url)
    });

    Some(ArtworkDetail {
        summary: ArtworkSummary {
            id,
            title: non_empty(artwork.title),
            artist: non_empty(artwork.artist_display),
            date_display: non_empty(artwork.date_display),
            image,
            medium: non_empty(artwork.medium_display),
            culture: None,
            web_url: Some(build_web_url(config, id)),
        },
        provenance: non_empty(artwork.provenance_text),
        dimensions: non_empty(artwork.dimensions),
        classification: non_empty(artwork.classification_title),
        place_of_origin: non_empty(artwork.place_of_origin),
        credit_line: non_empty(artwork.credit_line),
        is_public_domain: artwork.is_public_domain,
    })
}
