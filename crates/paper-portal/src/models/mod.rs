//! Data models.
//!
//! Provider records use `#[serde(default)]` for optional fields and
//! camelCase renames to match API naming; [`Paper`] is the portal's own shape.

mod inputs;
mod paper;
mod provider;

pub use inputs::{ANY_SENTINEL, RawSearchQuery, RawSecondaryQuery, SearchParams};
pub(crate) use paper::{contains_ci, unique_topics};
pub use paper::Paper;
pub use provider::{AuthorRef, ProviderPaper, ProviderSearchResponse, S2FieldOfStudy};
