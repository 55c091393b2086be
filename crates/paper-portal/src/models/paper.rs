//! The uniform paper record returned to callers.

use serde::{Deserialize, Serialize};

/// A research paper in the portal's own shape.
///
/// Built by the normalizer, the fallback sample set or a secondary source.
/// `topics` holds no duplicates and keeps insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Source-supplied identifier.
    pub id: String,

    /// Paper title.
    pub title: String,

    /// Abstract, or a placeholder when the source had none.
    pub r#abstract: String,

    /// Author names in byline order.
    pub authors: Vec<String>,

    /// Publication year as text ("Unknown" when missing).
    pub year: String,

    /// Link to the paper.
    pub url: String,

    /// Topic tags.
    pub topics: Vec<String>,

    /// Number of citations, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i32>,

    /// Open access flag, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_open_access: Option<bool>,
}

impl Paper {
    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Case-insensitive substring match on title, abstract, authors or topics.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        contains_ci(&self.title, &needle)
            || contains_ci(&self.r#abstract, &needle)
            || self.authors.iter().any(|a| contains_ci(a, &needle))
            || self.topics.iter().any(|t| contains_ci(t, &needle))
    }

    /// Case-insensitive substring match on any topic tag.
    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        self.topics.iter().any(|t| contains_ci(t, &topic))
    }
}

/// `haystack` contains the already-lowercased `needle`, ignoring case.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Collect tags, dropping blanks and repeats while keeping first-seen order.
pub(crate) fn unique_topics<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut topics: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.into();
        if !tag.trim().is_empty() && !topics.contains(&tag) {
            topics.push(tag);
        }
    }
    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper() -> Paper {
        Paper {
            id: "p1".to_string(),
            title: "Quantum Algorithms for Optimization".to_string(),
            r#abstract: "Classical solvers struggle.".to_string(),
            authors: vec!["Robert Chen".to_string(), "Lisa Wang".to_string()],
            year: "2023".to_string(),
            url: "https://example.com/p1".to_string(),
            topics: vec!["Quantum Computing".to_string(), "Optimization".to_string()],
            citation_count: None,
            is_open_access: Some(true),
        }
    }

    #[test]
    fn test_serialize_camel_case_and_skips_absent() {
        let value = serde_json::to_value(paper()).unwrap();
        assert_eq!(value["abstract"], "Classical solvers struggle.");
        assert_eq!(value["isOpenAccess"], true);
        assert!(value.get("citationCount").is_none());
    }

    #[test]
    fn test_matches_text_fields() {
        let p = paper();
        assert!(p.matches_text("quantum"));
        assert!(p.matches_text("SOLVERS"));
        assert!(p.matches_text("lisa"));
        assert!(p.matches_text("optimization"));
        assert!(!p.matches_text("genomics"));
    }

    #[test]
    fn test_has_topic_substring() {
        let p = paper();
        assert!(p.has_topic("quantum"));
        assert!(p.has_topic("Quantum Computing"));
        assert!(!p.has_topic("Machine Learning"));
    }

    #[test]
    fn test_unique_topics_keeps_order() {
        let topics = unique_topics(["b", "a", "b", "", "c", "a"]);
        assert_eq!(topics, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_author_names() {
        assert_eq!(paper().author_names(), "Robert Chen, Lisa Wang");
    }
}
