//! Secondary result sources.
//!
//! A secondary source is used only when the user opts in. The bundled
//! [`SimulatedWebSource`] performs no network search; it fabricates a small,
//! deterministic batch from the query so the opt-in flow can be exercised.

use chrono::{DateTime, Datelike, Utc};
use url::Url;

use crate::error::SearchResult;
use crate::models::{Paper, unique_topics};

/// An alternate source of paper-shaped results.
#[async_trait::async_trait]
pub trait SecondarySource: Send + Sync {
    /// Source name, also used to namespace result ids.
    fn name(&self) -> &'static str;

    /// Search with an already sanitized query.
    async fn search(&self, query: &str) -> SearchResult<Vec<Paper>>;
}

/// Simulated web search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedWebSource;

impl SimulatedWebSource {
    /// Source name.
    pub const NAME: &'static str = "duckduckgo";

    /// Build the canned results as of `now`.
    #[must_use]
    pub fn search_at(&self, query: &str, now: DateTime<Utc>) -> Vec<Paper> {
        let stamp = now.timestamp_millis();
        let year = now.year();
        let head = query.split_whitespace().next().unwrap_or_default();

        vec![
            Paper {
                id: format!("{}-1-{stamp}", Self::NAME),
                title: format!("{query} - Recent Research and Findings"),
                r#abstract: format!(
                    "This paper explores the latest developments in {query} with a focus on practical applications and theoretical frameworks."
                ),
                authors: vec!["A. Researcher".to_string(), "B. Academic".to_string()],
                year: year.to_string(),
                url: search_link(
                    "https://arxiv.org/search/",
                    &[("query", query), ("searchtype", "all")],
                ),
                topics: unique_topics([head, "Research", "Academic"]),
                citation_count: None,
                is_open_access: Some(true),
            },
            Paper {
                id: format!("{}-2-{stamp}", Self::NAME),
                title: format!("A Comprehensive Review of {query}"),
                r#abstract: format!(
                    "This review paper summarizes the current state of knowledge regarding {query} and identifies gaps for future research."
                ),
                authors: vec!["C. Scholar".to_string(), "D. Professor".to_string()],
                year: (year - 1).to_string(),
                url: search_link("https://scholar.google.com/scholar", &[("q", query)]),
                topics: unique_topics(["Review", "Meta-analysis", head]),
                citation_count: Some(42),
                is_open_access: Some(false),
            },
        ]
    }
}

#[async_trait::async_trait]
impl SecondarySource for SimulatedWebSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn search(&self, query: &str) -> SearchResult<Vec<Paper>> {
        let results = self.search_at(query, Utc::now());
        tracing::debug!(source = Self::NAME, count = results.len(), "Secondary search");
        Ok(results)
    }
}

/// `base` with `params` percent-encoded into its query string.
fn search_link(base: &str, params: &[(&str, &str)]) -> String {
    Url::parse_with_params(base, params).map_or_else(|_| base.to_string(), String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_ids_namespaced_by_source_and_time() {
        let now = fixed_now();
        let results = SimulatedWebSource.search_at("graph neural networks", now);
        let stamp = now.timestamp_millis();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, format!("duckduckgo-1-{stamp}"));
        assert_eq!(results[1].id, format!("duckduckgo-2-{stamp}"));
    }

    #[test]
    fn test_content_derived_from_query() {
        let results = SimulatedWebSource.search_at("graph neural networks", fixed_now());
        assert_eq!(results[0].title, "graph neural networks - Recent Research and Findings");
        assert_eq!(results[0].year, "2024");
        assert_eq!(results[1].year, "2023");
        assert_eq!(results[0].topics, vec!["graph", "Research", "Academic"]);
        assert_eq!(results[1].topics, vec!["Review", "Meta-analysis", "graph"]);
        assert_eq!(results[1].citation_count, Some(42));
        assert_eq!(results[0].is_open_access, Some(true));
    }

    #[test]
    fn test_urls_percent_encode_query() {
        let results = SimulatedWebSource.search_at("a b&c", fixed_now());
        assert_eq!(results[0].url, "https://arxiv.org/search/?query=a+b%26c&searchtype=all");
        assert_eq!(results[1].url, "https://scholar.google.com/scholar?q=a+b%26c");
    }

    #[test]
    fn test_empty_query_completes() {
        let results = SimulatedWebSource.search_at("", fixed_now());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].topics, vec!["Research", "Academic"]);
    }

    #[tokio::test]
    async fn test_trait_search() {
        let source = SimulatedWebSource;
        assert_eq!(source.name(), "duckduckgo");
        let results = source.search("robotics").await.unwrap();
        assert!(results.iter().all(|p| p.id.starts_with("duckduckgo-")));
    }
}
