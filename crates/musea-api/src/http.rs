//! HTTP backend abstraction for the museum APIs.
//!
//! The client is generic over [`HttpBackend`] so request building and
//! parsing can be exercised against canned bodies. The production backend
//! makes exactly one attempt per call; failures surface to the caller.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{MuseumError, MuseumResult};
use crate::models::ApiConfig;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Something that can GET a URL and decode its JSON body.
///
/// Implementation detail; consumers go through `ArtworkCatalogPort`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> MuseumResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Build the underlying client with the configured timeout and user agent.
    pub fn new(config: &ApiConfig) -> MuseumResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

/// Map a transport error, singling out timeouts.
fn map_transport_error(err: reqwest::Error, url: &Url) -> MuseumError {
    if err.is_timeout() {
        MuseumError::Timeout {
            url: url.to_string(),
        }
    } else {
        MuseumError::Network(err)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> MuseumResult<T> {
        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MuseumError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(e, url))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
