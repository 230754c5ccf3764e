//! HTTP client for the hosted vector index.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::records::{SearchRecordsRequest, NAMESPACE};
use crate::search::{CatalogError, ProductSearch};

const API_KEY_HEADER: &str = "Api-Key";
const API_VERSION_HEADER: &str = "X-Pinecone-API-Version";
const API_VERSION: &str = "2025-04";

/// Client for the records search endpoint of one index host.
///
/// Cloning is cheap: clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct CatalogIndex {
    http: reqwest::Client,
    search_url: String,
}

impl CatalogIndex {
    /// Build a client for the given data-plane host.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Client`] if the API key is not a valid
    /// header value or the HTTP client cannot be constructed.
    pub fn new(host: &str, api_key: &str) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| CatalogError::Client(e.to_string()))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http,
            search_url: search_url(host),
        })
    }
}

fn search_url(host: &str) -> String {
    format!(
        "{}/records/namespaces/{}/search",
        host.trim_end_matches('/'),
        NAMESPACE
    )
}

#[async_trait]
impl ProductSearch for CatalogIndex {
    async fn search(&self, query: &str) -> Result<serde_json::Value, CatalogError> {
        let body = SearchRecordsRequest::for_text(query);

        let response = self
            .http
            .post(&self.search_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "catalog search rejected");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;
        tracing::debug!(
            hits = value["result"]["hits"].as_array().map(|h| h.len()),
            "catalog search completed"
        );
        Ok(value)
    }
}
