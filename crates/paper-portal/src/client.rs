//! Semantic Scholar API client.
//!
//! Provides an async HTTP client with connection pooling via reqwest. Each
//! call is a single attempt: failures are reported as [`ProviderError`] and
//! recovery is left to the caller.

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::{ProviderError, ProviderResult};
use crate::models::ProviderSearchResponse;
use crate::search::ProviderRequest;

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref key) = config.api_key {
            let mut value = reqwest::header::HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert("x-api-key", value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            graph_api_url: config.graph_api_url.clone(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Run an encoded paper search.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status or an undecodable body.
    pub async fn search_papers(
        &self,
        request: &ProviderRequest,
    ) -> ProviderResult<ProviderSearchResponse> {
        let url = format!("{}/paper/search", self.graph_api_url);
        self.get(&url, &request.query_pairs()).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = Url::parse_with_params(url, params)?;
        tracing::debug!(path = url.path(), "Sending provider request");

        let response = self.client.get(url).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ProviderError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ProviderResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ProviderError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ProviderError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ProviderError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ProviderError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ProviderError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("has_api_key", &self.has_api_key())
            .field("graph_api_url", &self.graph_api_url)
            .finish()
    }
}
