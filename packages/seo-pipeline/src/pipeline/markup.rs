//! Markup stripping for raw fragment values.
//!
//! Fragment properties coming from rich-text editors carry inline markup;
//! the backend and the SEO fields get plain text only.

use regex::Regex;

/// Remove markup tags and decode common HTML entities.
pub fn strip_tags(text: &str) -> String {
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    let text = tag_pattern.replace_all(text, "");

    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
