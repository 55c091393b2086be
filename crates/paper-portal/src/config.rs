//! Configuration for the paper portal.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Public paper page, used when a record carries no URL of its own.
    pub const PAPER_PAGE_URL: &str = "https://www.semanticscholar.org/paper";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Environment variable holding the optional API key.
    pub const API_KEY_ENV: &str = "SEMANTIC_SCHOLAR_API_KEY";
}

/// Search limits.
pub mod limits {
    /// Results returned when the caller does not ask for a specific count.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Largest page the provider's search endpoint accepts.
    pub const MAX_LIMIT: u32 = 100;

    /// Over-fetch factor for topic searches, which are narrowed client-side.
    pub const TOPIC_FETCH_FACTOR: u32 = 2;
}

/// Filter choices offered to the search UI.
pub mod catalog {
    /// Popular research topics.
    pub const TOPICS: &[&str] = &[
        "Machine Learning",
        "Climate Science",
        "Quantum Computing",
        "Neuroscience",
        "Renewable Energy",
        "Artificial Intelligence",
        "Genomics",
        "Cybersecurity",
        "Blockchain",
        "Robotics",
    ];

    /// Most recent selectable year.
    pub const LATEST_YEAR: u16 = 2023;

    /// Oldest selectable year.
    pub const EARLIEST_YEAR: u16 = 2000;

    /// Selectable years, newest first.
    #[must_use]
    pub fn years() -> Vec<String> {
        (EARLIEST_YEAR..=LATEST_YEAR).rev().map(|y| y.to_string()).collect()
    }
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields requested for every paper search.
    pub const SEARCH: &[&str] = &[
        "paperId",
        "externalIds",
        "url",
        "title",
        "abstract",
        "venue",
        "year",
        "authors",
        "citationCount",
        "influentialCitationCount",
        "isOpenAccess",
        "fieldsOfStudy",
        "s2FieldsOfStudy",
    ];
}

/// Portal configuration.
#[derive(Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Base URL for canonical paper links.
    pub paper_page_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            graph_api_url: api::GRAPH_API.to_string(),
            paper_page_url: api::PAPER_PAGE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            paper_page_url: api::PAPER_PAGE_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = match std::env::var(api::API_KEY_ENV) {
            Ok(key) => Some(key),
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => anyhow::bail!("{} is not valid unicode: {e}", api::API_KEY_ENV),
        };
        Ok(Self::new(api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_api_key", &self.has_api_key())
            .field("graph_api_url", &self.graph_api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.graph_api_url, api::GRAPH_API);
    }

    #[test]
    fn test_config_blank_api_key_is_ignored() {
        let config = Config::new(Some("   ".to_string()));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_config_for_testing_points_at_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = Config::new(Some("super-secret".to_string()));
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("has_api_key: true"));
    }

    #[test]
    fn test_catalog_years_newest_first() {
        let years = catalog::years();
        assert_eq!(years.len(), 24);
        assert_eq!(years.first().map(String::as_str), Some("2023"));
        assert_eq!(years.last().map(String::as_str), Some("2000"));
    }

    #[test]
    fn test_search_fields() {
        assert!(fields::SEARCH.contains(&"s2FieldsOfStudy"));
        assert!(fields::SEARCH.contains(&"isOpenAccess"));
        assert_eq!(fields::SEARCH.len(), 13);
    }
}
