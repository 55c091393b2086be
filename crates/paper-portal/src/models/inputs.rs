//! Search inputs.
//!
//! Raw query-string structs are deserialized at the HTTP boundary and turned
//! into sanitized, normalized parameters before anything else sees them.

use serde::{Deserialize, Serialize};

use crate::config::limits;
use crate::sanitize::sanitize_opt;

/// Legacy UI value meaning "no filter" for topic and year.
pub const ANY_SENTINEL: &str = "all";

/// Query string of `GET /search` and `GET /papers`, as sent by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSearchQuery {
    /// Free-text query.
    #[serde(default)]
    pub query: Option<String>,

    /// Topic filter.
    #[serde(default)]
    pub topic: Option<String>,

    /// Year filter.
    #[serde(default)]
    pub year: Option<String>,

    /// Requested result count, parsed leniently.
    #[serde(default)]
    pub limit: Option<String>,
}

/// Query string of `GET /secondary-search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSecondaryQuery {
    /// Free-text query.
    #[serde(default)]
    pub query: Option<String>,
}

/// Sanitized search parameters.
///
/// Fields are only reachable through constructors that sanitize, so a
/// `SearchParams` never carries raw user text. Blank values and the `"all"`
/// sentinel are stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    query: Option<String>,
    topic: Option<String>,
    year: Option<String>,
    limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { query: None, topic: None, year: None, limit: limits::DEFAULT_LIMIT }
    }
}

impl SearchParams {
    /// Build parameters from optional raw values.
    #[must_use]
    pub fn new(query: Option<&str>, topic: Option<&str>, year: Option<&str>) -> Self {
        Self {
            query: sanitize_opt(query),
            topic: normalize_filter(topic),
            year: normalize_filter(year),
            limit: limits::DEFAULT_LIMIT,
        }
    }

    /// Set the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = sanitize_opt(Some(query));
        self
    }

    /// Set the topic filter.
    #[must_use]
    pub fn with_topic(mut self, topic: &str) -> Self {
        self.topic = normalize_filter(Some(topic));
        self
    }

    /// Set the year filter.
    #[must_use]
    pub fn with_year(mut self, year: &str) -> Self {
        self.year = normalize_filter(Some(year));
        self
    }

    /// Set the result limit, clamped to what the provider accepts.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, limits::MAX_LIMIT);
        self
    }

    /// Free-text query, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Topic filter, if any.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Year filter, if any.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    /// Requested number of results.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// True when no query, topic or year is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.query.is_none() && self.topic.is_none() && self.year.is_none()
    }
}

impl From<RawSearchQuery> for SearchParams {
    fn from(raw: RawSearchQuery) -> Self {
        let params = Self::new(raw.query.as_deref(), raw.topic.as_deref(), raw.year.as_deref());
        match raw.limit.as_deref().and_then(parse_limit) {
            Some(limit) => params.with_limit(limit),
            None => params,
        }
    }
}

/// Sanitize a topic/year value and drop the "no filter" sentinel.
fn normalize_filter(value: Option<&str>) -> Option<String> {
    sanitize_opt(value).filter(|v| !v.eq_ignore_ascii_case(ANY_SENTINEL))
}

/// Leading decimal digits of `raw`, like a lenient integer parse.
fn parse_limit(raw: &str) -> Option<u32> {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let params = SearchParams::default();
        assert!(params.is_empty());
        assert_eq!(params.limit(), limits::DEFAULT_LIMIT);
    }

    #[test]
    fn test_sentinel_becomes_absent() {
        let params = SearchParams::new(None, Some("all"), Some("ALL"));
        assert!(params.topic().is_none());
        assert!(params.year().is_none());
        assert!(params.is_empty());
    }

    #[test]
    fn test_query_all_is_a_real_query() {
        let params = SearchParams::default().with_query("all");
        assert_eq!(params.query(), Some("all"));
    }

    #[test]
    fn test_values_are_sanitized() {
        let params = SearchParams::new(Some(" <b>ml</b> "), Some("AI/ML"), Some("2020"));
        assert_eq!(params.query(), Some("&lt;b&gt;ml&lt;&#x2F;b&gt;"));
        assert_eq!(params.topic(), Some("AI&#x2F;ML"));
        assert_eq!(params.year(), Some("2020"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let params = SearchParams::new(Some("   "), Some(""), None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_limit_clamped() {
        assert_eq!(SearchParams::default().with_limit(0).limit(), 1);
        assert_eq!(SearchParams::default().with_limit(500).limit(), limits::MAX_LIMIT);
        assert_eq!(SearchParams::default().with_limit(25).limit(), 25);
    }

    #[test]
    fn test_from_raw_parses_limit_leniently() {
        let raw = RawSearchQuery {
            query: Some("transformer".to_string()),
            limit: Some("5abc".to_string()),
            ..RawSearchQuery::default()
        };
        let params = SearchParams::from(raw);
        assert_eq!(params.limit(), 5);

        let raw = RawSearchQuery { limit: Some("many".to_string()), ..RawSearchQuery::default() };
        assert_eq!(SearchParams::from(raw).limit(), limits::DEFAULT_LIMIT);
    }
}
