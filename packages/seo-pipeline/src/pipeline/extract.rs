//! Text extraction over a content-fragment tree.

use tracing::debug;

use crate::pipeline::markup::{collapse_whitespace, strip_tags};
use crate::traits::fragment::{ContentFragment, Descendants};

/// Property names harvested when no override is configured.
pub const DEFAULT_TEXT_PROPERTIES: &[&str] = &["text"];

/// Collect the text of a fragment tree into one plain-text string.
///
/// Walks the tree depth-first (pre-order, children in declaration order)
/// and appends, for each visited fragment, the value of every name in
/// `property_names` the fragment has. Values are joined with single
/// spaces, markup is stripped, and whitespace runs collapse to single
/// spaces.
///
/// Deterministic for a given tree and property list; no fragment is
/// visited twice, and fragments without a matching property contribute
/// nothing.
pub fn extract_text<F: ContentFragment>(root: &F, property_names: &[String]) -> String {
    let mut values: Vec<&str> = Vec::new();

    for fragment in Descendants::new(root) {
        for name in property_names {
            if let Some(value) = fragment.property(name) {
                values.push(value);
            }
        }
    }

    let collected = values.len();
    let text = collapse_whitespace(&strip_tags(&values.join(" ")));
    debug!(values = collected, chars = text.chars().count(), "extracted fragment text");

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fragment::Fragment;

    fn text_props() -> Vec<String> {
        vec!["text".to_string()]
    }

    #[test]
    fn test_extracts_matching_properties_only() {
        let tree = Fragment::new("page")
            .with_child(Fragment::new("text").with_property("text", "Hello"))
            .with_child(Fragment::new("text").with_property("text", "World"))
            .with_child(Fragment::new("image").with_property("other", "x"));

        assert_eq!(extract_text(&tree, &text_props()), "Hello World");
    }

    #[test]
    fn test_extraction_order_is_depth_first() {
        let tree = Fragment::new("page")
            .with_property("text", "intro")
            .with_child(
                Fragment::new("section")
                    .with_property("text", "first")
                    .with_child(Fragment::new("text").with_property("text", "nested")),
            )
            .with_child(Fragment::new("section").with_property("text", "second"));

        assert_eq!(extract_text(&tree, &text_props()), "intro first nested second");
    }

    #[test]
    fn test_strips_markup_from_values() {
        let tree = Fragment::new("page")
            .with_child(Fragment::new("text").with_property("text", "<p>Hello</p>"))
            .with_child(Fragment::new("text").with_property("text", "<b>World</b>"));

        assert_eq!(extract_text(&tree, &text_props()), "Hello World");
    }

    #[test]
    fn test_multiple_property_names() {
        let tree = Fragment::new("page")
            .with_child(
                Fragment::new("hero")
                    .with_property("headline", "Big News")
                    .with_property("text", "Details inside"),
            );

        let names = vec!["headline".to_string(), "text".to_string()];
        assert_eq!(extract_text(&tree, &names), "Big News Details inside");
    }

    #[test]
    fn test_empty_tree_yields_empty_string() {
        let tree = Fragment::new("page");
        assert_eq!(extract_text(&tree, &text_props()), "");
    }
}
