//! Search, fetch-detail and filter orchestration for one render cycle.
//!
//! [`BrowseService`] is the surface the view layer talks to. It never
//! returns an error: upstream failures become empty results plus
//! [`FetchFailure`] notices, so every call yields something renderable.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, warn};

use super::outcome::{FetchFailure, FetchOutcome};
use crate::domain::{
    ArtworkDetail, ArtworkId, CatalogProvider, FilterOptions, ImageFilterMode, Navigation,
    PageState, PaginationInfo, apply_filters,
};
use crate::ports::{ArtworkCatalogPort, SearchHit, SearchPage, SearchRequest};

/// Everything the view needs to draw one page.
#[derive(Debug, Clone, Serialize)]
pub struct BrowsePage {
    /// Provider the page came from
    pub provider: CatalogProvider,
    /// Query the page was computed for
    pub query: String,
    /// Page number shown
    pub page: u32,
    /// Requested page size
    pub page_size: u32,
    /// Items to render, in upstream order
    pub items: Vec<ArtworkDetail>,
    /// Result-set size
    pub pagination: PaginationInfo,
    /// First/previous/next controls
    pub navigation: Navigation,
    /// Hits returned by the search before detail fetch and filtering
    pub candidates: usize,
    /// Failures to surface to the user
    pub notices: Vec<FetchFailure>,
}

impl BrowsePage {
    /// Whether there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hits that were dropped by a failed fetch or a filter.
    #[must_use]
    pub fn omitted(&self) -> usize {
        self.candidates.saturating_sub(self.items.len())
    }
}

/// Orchestrates catalog calls for the view layer.
pub struct BrowseService {
    catalog: Arc<dyn ArtworkCatalogPort>,
    detail_concurrency: usize,
}

impl BrowseService {
    /// Create a service that fetches details one at a time.
    pub fn new(catalog: Arc<dyn ArtworkCatalogPort>) -> Self {
        Self {
            catalog,
            detail_concurrency: 1,
        }
    }

    /// Allow up to `limit` detail fetches in flight. Result order is kept.
    #[must_use]
    pub fn with_detail_concurrency(mut self, limit: usize) -> Self {
        self.detail_concurrency = limit.max(1);
        self
    }

    /// Provider behind this service.
    pub fn provider(&self) -> CatalogProvider {
        self.catalog.provider()
    }

    /// Search, degrading failures into a notice.
    pub async fn search(&self, request: &SearchRequest) -> FetchOutcome<SearchPage> {
        match self.catalog.search(request).await {
            Ok(page) => {
                debug!(
                    query = %request.query,
                    page = request.page,
                    hits = page.hits.len(),
                    total = page.pagination.total_items,
                    "search completed"
                );
                FetchOutcome::Loaded(page)
            }
            Err(err) => {
                warn!(query = %request.query, page = request.page, error = %err, "search failed");
                FetchOutcome::Failed(FetchFailure::search(&err))
            }
        }
    }

    /// Fetch one artwork, degrading failures into a notice.
    pub async fn fetch_detail(&self, id: ArtworkId) -> FetchOutcome<ArtworkDetail> {
        match self.catalog.fetch_detail(id).await {
            Ok(detail) => FetchOutcome::Loaded(detail),
            Err(err) => {
                warn!(id, error = %err, "detail fetch failed");
                FetchOutcome::Failed(FetchFailure::detail(id, &err))
            }
        }
    }

    /// Run one render cycle for `state`.
    ///
    /// Searches, fetches details for identifier-only hits, applies
    /// `filters` and computes navigation for the current page.
    pub async fn load_page(&self, state: &PageState, filters: &FilterOptions) -> BrowsePage {
        let request = SearchRequest::from_page_state(state, filters.require_image);
        let mut notices = Vec::new();

        let (search_page, failure) = self.search(&request).await.into_parts(SearchPage::empty);
        notices.extend(failure);

        let candidates = search_page.hits.len();
        let (details, failures) = self.resolve_hits(search_page.hits).await;
        notices.extend(failures);

        let items = apply_filters(details, &self.local_filters(filters));
        let pagination = search_page.pagination;

        debug!(
            query = %request.query,
            page = request.page,
            candidates,
            shown = items.len(),
            "page loaded"
        );

        BrowsePage {
            provider: self.catalog.provider(),
            query: request.query,
            page: request.page,
            page_size: request.page_size,
            items,
            pagination,
            navigation: Navigation::new(request.page, pagination.total_pages),
            candidates,
            notices,
        }
    }

    /// Load the detail view for the selected artwork, if any.
    pub async fn load_selected(&self, state: &PageState) -> Option<FetchOutcome<ArtworkDetail>> {
        match state.selected_id {
            Some(id) => Some(self.fetch_detail(id).await),
            None => None,
        }
    }

    /// Discard memoized responses.
    pub async fn clear_cache(&self) {
        self.catalog.clear_cache().await;
        debug!(provider = %self.catalog.provider(), "cache clear requested");
    }

    /// Filters to apply locally. Upstream image filtering is not repeated.
    fn local_filters(&self, filters: &FilterOptions) -> FilterOptions {
        match self.catalog.image_filter_mode() {
            ImageFilterMode::Upstream => filters.with_require_image(false),
            ImageFilterMode::Local => *filters,
        }
    }

    /// Turn hits into details, fetching the ones that only carry an id.
    async fn resolve_hits(&self, hits: Vec<SearchHit>) -> (Vec<ArtworkDetail>, Vec<FetchFailure>) {
        let outcomes: Vec<FetchOutcome<ArtworkDetail>> = stream::iter(hits)
            .map(|hit| async move {
                match hit {
                    SearchHit::Record(detail) => FetchOutcome::Loaded(*detail),
                    SearchHit::Id(id) => self.fetch_detail(id).await,
                }
            })
            .buffered(self.detail_concurrency)
            .collect()
            .await;

        let mut details = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                FetchOutcome::Loaded(detail) => details.push(detail),
                FetchOutcome::Failed(failure) => failures.push(failure),
            }
        }
        (details, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtworkSummary, ImageRef, PageSize};
    use crate::ports::{CatalogError, CatalogResult};
    use crate::services::FetchOperation;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl ArtworkCatalogPort for Catalog {
            fn provider(&self) -> CatalogProvider;
            fn image_filter_mode(&self) -> ImageFilterMode;
            async fn search(&self, request: &SearchRequest) -> CatalogResult<SearchPage>;
            async fn fetch_detail(&self, id: ArtworkId) -> CatalogResult<ArtworkDetail>;
            async fn clear_cache(&self);
        }
    }

    fn detail(id: ArtworkId, image: bool, public_domain: Option<bool>) -> ArtworkDetail {
        ArtworkDetail {
            summary: ArtworkSummary {
                id,
                title: Some(format!("Artwork {id}")),
                image: image.then(|| ImageRef::direct(format!("https://img/{id}.jpg"))),
                ..ArtworkSummary::default()
            },
            is_public_domain: public_domain,
            ..ArtworkDetail::default()
        }
    }

    fn met_catalog() -> MockCatalog {
        let mut catalog = MockCatalog::new();
        catalog.expect_provider().return_const(CatalogProvider::Met);
        catalog
            .expect_image_filter_mode()
            .return_const(ImageFilterMode::Upstream);
        catalog
    }

    fn ids(page: &BrowsePage) -> Vec<ArtworkId> {
        page.items.iter().map(ArtworkDetail::id).collect()
    }

    #[tokio::test]
    async fn test_load_page_fetches_details_in_order() {
        let mut catalog = met_catalog();
        catalog
            .expect_search()
            .withf(|request| request.page == 2 && request.page_size == 9 && request.images_only)
            .returning(|_| {
                Ok(SearchPage {
                    hits: vec![SearchHit::Id(30), SearchHit::Id(10), SearchHit::Id(20)],
                    pagination: PaginationInfo::from_total(25, 9),
                })
            });
        catalog
            .expect_fetch_detail()
            .times(3)
            .returning(|id| Ok(detail(id, true, Some(true))));

        let service = BrowseService::new(Arc::new(catalog));
        let state = PageState::new("bird")
            .with_page_size(PageSize::Nine)
            .with_page(2)
            .unwrap();
        let filters = FilterOptions::none()
            .with_require_image(true)
            .with_require_public_domain(true);

        let page = service.load_page(&state, &filters).await;

        assert_eq!(ids(&page), vec![30, 10, 20]);
        assert_eq!(page.pagination.total_items, 25);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.navigation.previous.enabled);
        assert!(page.navigation.next.enabled);
        assert!(page.notices.is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_degrades_to_empty_page() {
        let mut catalog = met_catalog();
        catalog.expect_search().returning(|_| {
            Err(CatalogError::FetchFailed {
                message: "connection refused".to_string(),
            })
        });
        catalog.expect_fetch_detail().never();

        let service = BrowseService::new(Arc::new(catalog));
        let page = service
            .load_page(&PageState::default(), &FilterOptions::none())
            .await;

        assert!(page.is_empty());
        assert_eq!(page.pagination, PaginationInfo::empty());
        assert_eq!(page.notices.len(), 1);
        assert_eq!(page.notices[0].operation, FetchOperation::Search);
        assert_eq!(
            page.notices[0].to_string(),
            "Search failed: connection refused"
        );
        assert!(!page.navigation.next.enabled);
    }

    #[tokio::test]
    async fn test_failed_detail_is_omitted_with_notice() {
        let mut catalog = met_catalog();
        catalog.expect_search().returning(|_| {
            Ok(SearchPage {
                hits: (1..=10).map(SearchHit::Id).collect(),
                pagination: PaginationInfo::from_total(10, 12),
            })
        });
        catalog.expect_fetch_detail().returning(|id| {
            if id == 4 {
                Err(CatalogError::FetchFailed {
                    message: "request timed out".to_string(),
                })
            } else {
                Ok(detail(id, true, Some(true)))
            }
        });

        let service = BrowseService::new(Arc::new(catalog));
        let page = service
            .load_page(&PageState::default(), &FilterOptions::none())
            .await;

        assert_eq!(ids(&page), vec![1, 2, 3, 5, 6, 7, 8, 9, 10]);
        assert_eq!(page.omitted(), 1);
        assert_eq!(page.notices.len(), 1);
        assert_eq!(page.notices[0].operation, FetchOperation::Detail { id: 4 });
    }

    #[tokio::test]
    async fn test_upstream_image_mode_skips_local_image_filter() {
        let mut catalog = met_catalog();
        catalog.expect_search().returning(|_| {
            Ok(SearchPage {
                hits: vec![SearchHit::Id(1), SearchHit::Id(2)],
                pagination: PaginationInfo::from_total(2, 12),
            })
        });
        catalog
            .expect_fetch_detail()
            .returning(|id| Ok(detail(id, id == 1, Some(true))));

        let service = BrowseService::new(Arc::new(catalog));
        let filters = FilterOptions::none().with_require_image(true);
        let page = service.load_page(&PageState::default(), &filters).await;

        assert_eq!(ids(&page), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_local_image_mode_filters_records_without_detail_fetch() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_provider()
            .return_const(CatalogProvider::ArtInstitute);
        catalog
            .expect_image_filter_mode()
            .return_const(ImageFilterMode::Local);
        catalog.expect_search().returning(|_| {
            Ok(SearchPage {
                hits: vec![
                    SearchHit::Record(Box::new(detail(1, true, Some(true)))),
                    SearchHit::Record(Box::new(detail(2, false, Some(true)))),
                    SearchHit::Record(Box::new(detail(3, true, None))),
                ],
                pagination: PaginationInfo::from_server(3, 1),
            })
        });
        catalog.expect_fetch_detail().never();

        let service = BrowseService::new(Arc::new(catalog));
        let filters = FilterOptions::none()
            .with_require_image(true)
            .with_require_public_domain(true);
        let page = service.load_page(&PageState::default(), &filters).await;

        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.candidates, 3);
        assert_eq!(page.provider, CatalogProvider::ArtInstitute);
    }

    #[tokio::test]
    async fn test_load_selected() {
        let mut catalog = met_catalog();
        catalog
            .expect_fetch_detail()
            .with(eq(77))
            .times(1)
            .returning(|id| Ok(detail(id, true, None)));

        let service = BrowseService::new(Arc::new(catalog));

        assert!(service.load_selected(&PageState::default()).await.is_none());

        let state = PageState::default().with_selection(Some(77));
        let outcome = service.load_selected(&state).await.unwrap();
        tokio_test::assert_ok!(outcome.ok().ok_or("missing detail"));
    }

    #[tokio::test]
    async fn test_clear_cache_delegates() {
        let mut catalog = met_catalog();
        catalog.expect_clear_cache().times(1).return_const(());

        let service = BrowseService::new(Arc::new(catalog));
        service.clear_cache().await;
    }
}
