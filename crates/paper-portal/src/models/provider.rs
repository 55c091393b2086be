//! Raw paper records as returned by the Semantic Scholar search endpoint.
//!
//! Every field may be missing or `null`; normalization into
//! [`Paper`](super::Paper) substitutes defaults. A missing `paperId`
//! deserializes as an empty string.

use serde::{Deserialize, Deserializer, Serialize};

/// A paper record from the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPaper {
    /// Unique Semantic Scholar paper ID, empty when the provider omitted it.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub paper_id: String,

    /// Canonical Semantic Scholar URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// List of authors.
    #[serde(default)]
    pub authors: Option<Vec<AuthorRef>>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Whether this paper is open access.
    #[serde(default)]
    pub is_open_access: Option<bool>,

    /// Fields of study (e.g., "Computer Science", "Medicine").
    #[serde(default)]
    pub fields_of_study: Option<Vec<String>>,

    /// Fine-grained categories with their classification source.
    #[serde(default, rename = "s2FieldsOfStudy")]
    pub s2_fields_of_study: Option<Vec<S2FieldOfStudy>>,
}

impl ProviderPaper {
    /// True if the record carries a paper ID.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.paper_id.is_empty()
    }

    /// Fields of study, empty when absent.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        self.fields_of_study.as_deref().unwrap_or_default()
    }

    /// Category names from `s2FieldsOfStudy`, skipping entries without one.
    pub fn s2_categories(&self) -> impl Iterator<Item = &str> {
        self.s2_fields_of_study
            .iter()
            .flatten()
            .filter_map(|f| f.category.as_deref())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Author reference embedded in a paper record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `s2FieldsOfStudy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S2FieldOfStudy {
    /// Category name (e.g. "Physics").
    #[serde(default)]
    pub category: Option<String>,

    /// Classifier that produced the category ("external", "s2-fos-model").
    #[serde(default)]
    pub source: Option<String>,
}

/// Search response wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSearchResponse {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Offset of the next page, when more results exist.
    #[serde(default)]
    pub next: Option<i32>,

    /// Papers in this page.
    #[serde(default)]
    pub data: Vec<ProviderPaper>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let paper: ProviderPaper = serde_json::from_str(r#"{"paperId": "abc123"}"#).unwrap();
        assert_eq!(paper.paper_id, "abc123");
        assert!(paper.title.is_none());
        assert!(paper.fields().is_empty());
        assert_eq!(paper.s2_categories().count(), 0);
    }

    #[test]
    fn test_deserialize_nulls() {
        let json = r#"{
            "paperId": "p1",
            "abstract": null,
            "year": null,
            "authors": null,
            "fieldsOfStudy": null,
            "s2FieldsOfStudy": [{"category": null, "source": "external"}, {"category": "Physics", "source": "s2-fos-model"}]
        }"#;
        let paper: ProviderPaper = serde_json::from_str(json).unwrap();
        assert!(paper.r#abstract.is_none());
        assert!(paper.authors.is_none());
        assert_eq!(paper.s2_categories().collect::<Vec<_>>(), vec!["Physics"]);
    }

    #[test]
    fn test_missing_or_null_paper_id() {
        let paper: ProviderPaper = serde_json::from_str(r#"{"paperId": null}"#).unwrap();
        assert!(!paper.has_id());

        let paper: ProviderPaper = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert!(!paper.has_id());

        let response: ProviderSearchResponse = serde_json::from_str(
            r#"{"data": [{"paperId": "ok"}, {"paperId": null, "title": "orphan"}]}"#,
        )
        .unwrap();
        assert_eq!(response.data.len(), 2);
        assert!(response.data[0].has_id());
    }

    #[test]
    fn test_search_response_without_data() {
        let result: ProviderSearchResponse =
            serde_json::from_str(r#"{"total": 0, "offset": 0}"#).unwrap();
        assert_eq!(result.total, 0);
        assert!(result.data.is_empty());
        assert!(result.next.is_none());
    }
}
