//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::Paper;

/// Create a compact paper representation for terminal JSON output.
///
/// Drops the abstract and empty optional fields.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.id,
        "title": paper.title,
        "year": paper.year,
        "url": paper.url,
    });

    if !paper.authors.is_empty() {
        obj["authors"] = json!(paper.authors);
    }

    if !paper.topics.is_empty() {
        obj["topics"] = json!(paper.topics);
    }

    if let Some(citations) = paper.citation_count {
        obj["citations"] = json!(citations);
    }

    if let Some(open) = paper.is_open_access {
        obj["openAccess"] = json!(open);
    }

    obj
}

/// Format a result list as pretty JSON, full or compact.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_papers_json(
    papers: &[Paper],
    source: &str,
    compact: bool,
) -> serde_json::Result<String> {
    let papers: Value = if compact {
        papers.iter().map(compact_paper).collect()
    } else {
        serde_json::to_value(papers)?
    };

    serde_json::to_string_pretty(&json!({
        "source": source,
        "papers": papers,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper() -> Paper {
        Paper {
            id: "abc123".to_string(),
            title: "Test Paper".to_string(),
            r#abstract: "No abstract available".to_string(),
            authors: vec!["John Doe".to_string()],
            year: "2024".to_string(),
            url: "https://www.semanticscholar.org/paper/abc123".to_string(),
            topics: vec![],
            citation_count: Some(42),
            is_open_access: None,
        }
    }

    #[test]
    fn test_compact_paper() {
        let compact = compact_paper(&paper());

        assert_eq!(compact["id"], "abc123");
        assert_eq!(compact["title"], "Test Paper");
        assert_eq!(compact["year"], "2024");
        assert_eq!(compact["citations"], 42);
        assert_eq!(compact["authors"], json!(["John Doe"]));
        assert!(compact.get("topics").is_none());
        assert!(compact.get("openAccess").is_none());
        assert!(compact.get("abstract").is_none());
    }

    #[test]
    fn test_format_full() {
        let out = format_papers_json(&[paper()], "Semantic Scholar", false).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "Semantic Scholar");
        assert_eq!(value["papers"][0]["abstract"], "No abstract available");
        assert_eq!(value["papers"][0]["citationCount"], 42);
    }

    #[test]
    fn test_format_compact() {
        let out = format_papers_json(&[paper()], "sample data", true).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert!(value["papers"][0].get("abstract").is_none());
    }
}
