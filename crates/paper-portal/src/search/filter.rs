//! Client-side topic filtering of provider results.
//!
//! The search endpoint has no topic filter, so topic searches over-fetch and
//! keep only records whose category fields mention the topic.

use crate::models::{ProviderPaper, contains_ci};

/// True if any field of study or s2 category contains `topic`, ignoring case.
#[must_use]
pub fn matches_topic(record: &ProviderPaper, topic: &str) -> bool {
    let topic = topic.to_lowercase();
    record.fields().iter().any(|f| contains_ci(f, &topic))
        || record.s2_categories().any(|c| contains_ci(c, &topic))
}

/// Keep records matching `topic`, at most `limit` of them.
#[must_use]
pub fn filter_by_topic(
    records: Vec<ProviderPaper>,
    topic: &str,
    limit: usize,
) -> Vec<ProviderPaper> {
    records.into_iter().filter(|r| matches_topic(r, topic)).take(limit).collect()
}
