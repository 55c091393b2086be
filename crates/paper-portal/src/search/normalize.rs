//! Provider record to [`Paper`] conversion.

use crate::models::{Paper, ProviderPaper, unique_topics};

/// Placeholder for records without an abstract.
pub const NO_ABSTRACT: &str = "No abstract available";

/// Placeholder for records without a year.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Placeholder for records without a title.
pub const UNTITLED: &str = "Untitled";

/// Topic used when a record has no field-of-study data at all.
pub const GENERAL_TOPIC: &str = "General";

/// Convert one provider record. Never fails; every field has a default.
#[must_use]
pub fn normalize_paper(record: ProviderPaper, paper_page_url: &str) -> Paper {
    let topics = if record.fields().is_empty() {
        let s2 = unique_topics(record.s2_categories());
        if s2.is_empty() { vec![GENERAL_TOPIC.to_string()] } else { s2 }
    } else {
        unique_topics(record.fields().iter().map(String::as_str))
    };

    let url = record
        .url
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| format!("{}/{}", paper_page_url, record.paper_id));

    Paper {
        title: record.title.filter(|t| !t.is_empty()).unwrap_or_else(|| UNTITLED.to_string()),
        r#abstract: record
            .r#abstract
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| NO_ABSTRACT.to_string()),
        authors: record.authors.into_iter().flatten().filter_map(|a| a.name).collect(),
        year: record.year.map_or_else(|| UNKNOWN_YEAR.to_string(), |y| y.to_string()),
        url,
        topics,
        citation_count: record.citation_count,
        is_open_access: record.is_open_access,
        id: record.paper_id,
    }
}

/// Convert a batch of provider records, preserving order.
#[must_use]
pub fn normalize_papers(records: Vec<ProviderPaper>, paper_page_url: &str) -> Vec<Paper> {
    records.into_iter().map(|r| normalize_paper(r, paper_page_url)).collect()
}
