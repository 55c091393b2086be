//! Markdown output formatting.

use crate::models::Paper;

/// Abstracts longer than this many characters are cut.
const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Format a list of papers as Markdown.
#[must_use]
pub fn format_papers_markdown(papers: &[Paper], source: &str) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results from {source})\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize) -> String {
    let mut output = format!("## {}. [{}]({})\n\n", index, paper.title, paper.url);

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    }

    let mut meta = vec![format!("**Year**: {}", paper.year)];
    if let Some(citations) = paper.citation_count {
        meta.push(format!("**Citations**: {citations}"));
    }
    if paper.is_open_access == Some(true) {
        meta.push("**Open Access**".to_string());
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    if !paper.topics.is_empty() {
        output.push_str(&format!("**Topics**: {}\n\n", paper.topics.join(", ")));
    }

    let abs = &paper.r#abstract;
    if abs.chars().count() > ABSTRACT_PREVIEW_CHARS {
        let cut: String = abs.chars().take(ABSTRACT_PREVIEW_CHARS).collect();
        output.push_str(&format!("**Abstract**: {cut}...\n"));
    } else {
        output.push_str(&format!("**Abstract**: {abs}\n"));
    }

    output
}
