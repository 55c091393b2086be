//! Search orchestration.
//!
//! A search is one provider call chosen by [`encoder::encode`], optionally
//! narrowed by [`filter`], normalized into [`Paper`]s. When the provider call
//! fails the primary path answers from the bundled [`fallback`] set instead.

pub mod encoder;
pub mod fallback;
pub mod filter;
pub mod normalize;

use std::sync::Arc;

use crate::client::SemanticScholarClient;
use crate::config::Config;
use crate::error::{ProviderResult, SearchError, SearchResult};
use crate::models::{Paper, ProviderPaper, SearchParams};

pub use encoder::{ProviderRequest, SearchPlan, encode};
pub use fallback::{fallback_search, sample_papers};
pub use filter::{filter_by_topic, matches_topic};
pub use normalize::{normalize_paper, normalize_papers};

/// Where a result list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Live provider response.
    Provider,
    /// Bundled sample data, after a provider failure.
    Fallback,
}

impl ResultSource {
    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Provider => "Semantic Scholar",
            Self::Fallback => "sample data",
        }
    }
}

/// Papers plus the source that produced them.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Result list.
    pub papers: Vec<Paper>,
    /// Producer of the list.
    pub source: ResultSource,
}

/// Search orchestrator over the provider client.
#[derive(Debug, Clone)]
pub struct SearchService {
    /// API client.
    client: Arc<SemanticScholarClient>,

    /// Base for links to papers that carry no URL.
    paper_page_url: String,
}

impl SearchService {
    /// Create a service around an existing client.
    #[must_use]
    pub fn new(client: Arc<SemanticScholarClient>, config: &Config) -> Self {
        Self { client, paper_page_url: config.paper_page_url.clone() }
    }

    /// Create a service and its client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = SemanticScholarClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Check if the underlying client has an API key.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.client.has_api_key()
    }

    /// Search papers, falling back to sample data if the provider fails.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] when no query, topic or year is set.
    pub async fn search(&self, params: &SearchParams) -> SearchResult<Vec<Paper>> {
        self.search_with_source(params).await.map(|outcome| outcome.papers)
    }

    /// Like [`search`](Self::search), also reporting where results came from.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] when no query, topic or year is set.
    pub async fn search_with_source(&self, params: &SearchParams) -> SearchResult<SearchOutcome> {
        validate(params)?;

        match self.fetch(params).await {
            Ok(papers) => Ok(SearchOutcome { papers, source: ResultSource::Provider }),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    status = ?e.status(),
                    retryable = e.is_retryable(),
                    "Provider search failed, serving sample data"
                );
                let papers = fallback_search(params);
                tracing::debug!(count = papers.len(), "Fallback results");
                Ok(SearchOutcome { papers, source: ResultSource::Fallback })
            }
        }
    }

    /// Search the provider only; failures are returned, not hidden.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] for empty parameters and
    /// [`SearchError::Provider`] when the provider call fails.
    pub async fn search_provider(&self, params: &SearchParams) -> SearchResult<Vec<Paper>> {
        validate(params)?;
        Ok(self.fetch(params).await?)
    }

    async fn fetch(&self, params: &SearchParams) -> ProviderResult<Vec<Paper>> {
        let request = encode(params);
        tracing::debug!(
            plan = ?request.plan,
            fetch_limit = request.fetch_limit,
            "Searching provider"
        );

        let response = self.client.search_papers(&request).await?;
        let limit = request.result_limit as usize;

        let (records, skipped): (Vec<_>, Vec<_>) =
            response.data.into_iter().partition(ProviderPaper::has_id);
        if !skipped.is_empty() {
            tracing::debug!(count = skipped.len(), "Skipping records without a paper ID");
        }

        let records = match request.topic_filter() {
            Some(topic) => filter_by_topic(records, topic, limit),
            None => records.into_iter().take(limit).collect(),
        };

        Ok(normalize_papers(records, &self.paper_page_url))
    }
}

/// Reject parameters with nothing to search for.
fn validate(params: &SearchParams) -> SearchResult<()> {
    if params.is_empty() {
        return Err(SearchError::validation(
            "query",
            "At least one search parameter is required",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty() {
        let err = validate(&SearchParams::default()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_rejects_sentinel_only() {
        let params = SearchParams::new(None, Some("all"), Some("all"));
        assert!(validate(&params).is_err());
    }

    #[test]
    fn test_validate_accepts_any_field() {
        assert!(validate(&SearchParams::default().with_year("2020")).is_ok());
    }

    #[test]
    fn test_result_source_names() {
        assert_eq!(ResultSource::Provider.as_str(), "Semantic Scholar");
        assert_eq!(ResultSource::Fallback.as_str(), "sample data");
    }
}
