//! Content fragment tree - nodes with named string properties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::traits::fragment::{ContentFragment, Descendants};

/// A node in a content tree.
///
/// Fragments expose named string properties and an ordered list of child
/// fragments. Properties keep insertion order so text extraction is
/// deterministic. The type serializes to/from the JSON content files the
/// stores read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Stable identifier
    pub id: Uuid,

    /// Node type, e.g. "page" or "text"
    #[serde(rename = "type")]
    pub fragment_type: String,

    /// Named string properties, in insertion order
    #[serde(default)]
    pub properties: IndexMap<String, String>,

    /// Child fragments, in document order
    #[serde(default)]
    pub children: Vec<Fragment>,
}

impl Fragment {
    /// Create a new fragment with a fresh identifier.
    pub fn new(fragment_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            fragment_type: fragment_type.into(),
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the identifier.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Add a property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Append a child fragment.
    pub fn with_child(mut self, child: Fragment) -> Self {
        self.children.push(child);
        self
    }

    /// Look up a property value on this fragment only.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// True when the property is absent or blank.
    pub fn property_is_empty(&self, name: &str) -> bool {
        self.property(name).map_or(true, |value| value.trim().is_empty())
    }

    /// Depth-first iterator over this fragment and all descendants.
    pub fn descendants(&self) -> Descendants<'_, Fragment> {
        Descendants::new(self)
    }

    /// Find this fragment or a descendant by id.
    pub fn find(&self, id: Uuid) -> Option<&Fragment> {
        self.descendants().find(|f| f.id == id)
    }

    /// Mutable lookup of this fragment or a descendant by id.
    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Fragment> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }
}

impl ContentFragment for Fragment {
    fn property(&self, name: &str) -> Option<&str> {
        Fragment::property(self, name)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let fragment = Fragment::new("text").with_property("text", "Hello");

        assert_eq!(fragment.property("text"), Some("Hello"));
        assert_eq!(fragment.property("missing"), None);
    }

    #[test]
    fn test_property_is_empty() {
        let fragment = Fragment::new("page")
            .with_property("title", "Home")
            .with_property("metaKeywords", "  ");

        assert!(!fragment.property_is_empty("title"));
        assert!(fragment.property_is_empty("metaKeywords")); // blank counts as empty
        assert!(fragment.property_is_empty("metaDescription"));
    }

    #[test]
    fn test_find_nested() {
        let leaf = Fragment::new("text").with_property("text", "deep");
        let leaf_id = leaf.id;
        let tree = Fragment::new("page").with_child(Fragment::new("section").with_child(leaf));

        assert_eq!(tree.find(leaf_id).unwrap().property("text"), Some("deep"));
        assert!(tree.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let leaf = Fragment::new("text");
        let leaf_id = leaf.id;
        let mut tree = Fragment::new("page").with_child(leaf);

        tree.find_mut(leaf_id)
            .unwrap()
            .properties
            .insert("text".to_string(), "updated".to_string());

        assert_eq!(tree.find(leaf_id).unwrap().property("text"), Some("updated"));
    }

    #[test]
    fn test_deserializes_content_file_shape() {
        let raw = r#"{
            "id": "7f1f2f57-5be4-4f55-8c1a-2a7cbb1a3c1e",
            "type": "page",
            "properties": { "title": "Home" },
            "children": [
                { "id": "9f57e13b-3b5c-43a2-a536-3b46a7c1f90e", "type": "text" }
            ]
        }"#;

        let fragment: Fragment = serde_json::from_str(raw).unwrap();
        assert_eq!(fragment.fragment_type, "page");
        assert_eq!(fragment.property("title"), Some("Home"));
        assert_eq!(fragment.children.len(), 1);
        assert!(fragment.children[0].properties.is_empty());
    }
}
