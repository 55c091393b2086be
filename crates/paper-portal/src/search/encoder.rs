//! Maps search parameters to a provider request.

use crate::config::{fields, limits};
use crate::models::SearchParams;

/// Query issued when nothing else applies. Unreachable through
/// [`SearchService::search`](super::SearchService::search), which rejects
/// empty parameters first.
pub const DEFAULT_QUERY: &str = "recent research";

/// Which request form was chosen, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Full-text search on the caller's query.
    Query(String),
    /// Topic used as the search term, over-fetched and post-filtered.
    Topic(String),
    /// Search scoped with a `year:` qualifier.
    Year(String),
    /// Safety net for empty parameters.
    Recent,
}

/// A fully constructed request against `/paper/search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    /// Chosen request form.
    pub plan: SearchPlan,

    /// Value of the `query` parameter.
    pub query: String,

    /// Value of the `limit` parameter.
    pub fetch_limit: u32,

    /// Number of results the caller asked for.
    pub result_limit: u32,

    /// Value of the `fields` parameter.
    pub fields: &'static [&'static str],
}

impl ProviderRequest {
    /// Topic to post-filter by, for topic searches.
    #[must_use]
    pub fn topic_filter(&self) -> Option<&str> {
        match &self.plan {
            SearchPlan::Topic(topic) => Some(topic),
            _ => None,
        }
    }

    /// Query-string pairs for the provider call.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), self.query.clone()),
            ("limit".to_string(), self.fetch_limit.to_string()),
            ("fields".to_string(), self.fields.join(",")),
        ]
    }
}

/// Build the provider request for `params`.
///
/// Query wins over topic, topic over year. Sentinel values were already
/// dropped when `params` was built, so presence is all that matters here.
#[must_use]
pub fn encode(params: &SearchParams) -> ProviderRequest {
    let limit = params.limit();

    let (plan, query, fetch_limit) = if let Some(query) = params.query() {
        (SearchPlan::Query(query.to_string()), query.to_string(), limit)
    } else if let Some(topic) = params.topic() {
        let doubled = (limit * limits::TOPIC_FETCH_FACTOR).min(limits::MAX_LIMIT);
        (SearchPlan::Topic(topic.to_string()), topic.to_string(), doubled)
    } else if let Some(year) = params.year() {
        (SearchPlan::Year(year.to_string()), format!("year:{year}"), limit)
    } else {
        (SearchPlan::Recent, DEFAULT_QUERY.to_string(), limit)
    };

    ProviderRequest { plan, query, fetch_limit, result_limit: limit, fields: fields::SEARCH }
}
