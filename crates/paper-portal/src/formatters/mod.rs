//! Output formatting for result lists.

mod json;
mod markdown;

pub use json::{compact_paper, format_papers_json};
pub use markdown::{format_paper_markdown, format_papers_markdown};
