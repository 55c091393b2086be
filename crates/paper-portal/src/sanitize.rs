//! HTML entity escaping for user-supplied text.
//!
//! Every string that comes from a caller passes through [`sanitize`] before it
//! is placed in a provider URL or echoed back in a response. Markup is made
//! inert rather than removed, so escaped output is usually longer than the
//! input.

/// Escape HTML-significant characters and trim surrounding whitespace.
///
/// `<`, `>`, `&`, `"`, `'` and `/` are each replaced by their entity. This is
/// a single pass, so it is not idempotent: escaping an already escaped string
/// escapes the `&` of every entity again.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());

    for c in trimmed.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }

    out
}

/// Sanitize an optional value, mapping blank results to `None`.
#[must_use]
pub fn sanitize_opt(input: Option<&str>) -> Option<String> {
    input.map(sanitize).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_each_character() {
        assert_eq!(sanitize("<"), "&lt;");
        assert_eq!(sanitize(">"), "&gt;");
        assert_eq!(sanitize("&"), "&amp;");
        assert_eq!(sanitize("\""), "&quot;");
        assert_eq!(sanitize("'"), "&#x27;");
        assert_eq!(sanitize("/"), "&#x2F;");
    }

    #[test]
    fn test_script_tag_is_inert() {
        let out = sanitize("<script>alert('x')</script>");
        assert_eq!(out, "&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt;");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  machine learning \n"), "machine learning");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("Quantum Computing 2023"), "Quantum Computing 2023");
    }

    #[test]
    fn test_not_idempotent_with_ampersand() {
        let once = sanitize("R&D");
        let twice = sanitize(&once);
        assert_eq!(once, "R&amp;D");
        assert_eq!(twice, "R&amp;amp;D");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_sanitize_opt() {
        assert_eq!(sanitize_opt(None), None);
        assert_eq!(sanitize_opt(Some("  ")), None);
        assert_eq!(sanitize_opt(Some(" x ")), Some("x".to_string()));
    }
}
