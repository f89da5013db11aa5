//! HTTP client for the prospects API

use reqwest::Client;
use url::Url;

use super::types::{Prospect, SearchQuery};
use crate::error::ApiError;

/// Default base URL of the local prospects API
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

const PROSPECTS_ENDPOINT: &str = "prospects";

/// Client for the prospects API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProspectsClient {
    client: Client,
    endpoint: Url,
}

impl ProspectsClient {
    /// Build a client for `base_url`, appending `/prospects` to its path
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut endpoint = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .push(PROSPECTS_ENDPOINT);
        endpoint.set_query(None);
        endpoint.set_fragment(None);

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL with the query form-urlencoded, all keys present
    pub fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(query.pairs());
        url
    }

    /// Run one search. Non-2xx statuses and malformed bodies are errors.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Prospect>, ApiError> {
        let url = self.search_url(query);
        tracing::debug!("GET {}", url);

        let transport = |source: reqwest::Error| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        let body = response.bytes().await.map_err(transport)?;
        let prospects: Vec<Prospect> = serde_json::from_slice(&body)?;
        tracing::debug!("Received {} prospects", prospects.len());
        Ok(prospects)
    }
}
