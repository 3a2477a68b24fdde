//! Metropolitan Museum of Art calls.
//!
//! Search returns every matching id in one body; the page is cut locally
//! and each card needs its own object fetch.

use musea_core::{ArtworkDetail, ArtworkId, SearchPage, SearchRequest};

use super::MuseumClient;
use crate::error::MuseumResult;
use crate::http::HttpBackend;
use crate::models::{MetObject, MetSearchResponse};
use crate::parsing::{parse_met_object, parse_met_search};
use crate::url::{build_met_object_url, build_met_search_url};

impl<B: HttpBackend> MuseumClient<B> {
    /// Search and slice one page of ids.
    pub(crate) async fn met_search(&self, request: &SearchRequest) -> MuseumResult<SearchPage> {
        let url = build_met_search_url(&self.config, &request.query, request.images_only);
        let response: MetSearchResponse = self.fetch_json(&url).await?;
        Ok(parse_met_search(response, request))
    }

    /// Fetch one object record.
    pub(crate) async fn met_object(&self, id: ArtworkId) -> MuseumResult<ArtworkDetail> {
        let url = build_met_object_url(&self.config, id);
        let object: MetObject = self.fetch_json(&url).await?;
        parse_met_object(object, &self.config, id)
    }
}
