//! SEO field types and their character budgets.

use serde::{Deserialize, Serialize};

/// Maximum characters for the page summary.
pub const SUMMARY_BUDGET: usize = 200;

/// Maximum characters for the meta keywords.
pub const META_KEYWORDS_BUDGET: usize = 255;

/// Maximum characters for the meta description.
pub const META_DESCRIPTION_BUDGET: usize = 160;

/// The backend's parsed response, before truncation.
///
/// All three keys are required; a payload missing any of them fails to
/// parse and the pipeline degrades to [`SeoFields::empty`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSuggestion {
    pub summary: String,
    pub meta_keywords: String,
    pub meta_description: String,
}

/// Validated SEO output.
///
/// Each field is at most its budget in characters, cut only at whitespace
/// boundaries, with trailing punctuation stripped. Serializes with the
/// wire names the editor widget expects (`summary`, `metaKeywords`,
/// `metaDescription`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoFields {
    pub summary: String,
    pub meta_keywords: String,
    pub meta_description: String,
}

impl SeoFields {
    /// The degrade value returned for unparseable backend payloads.
    pub fn empty() -> Self {
        Self {
            summary: String::new(),
            meta_keywords: String::new(),
            meta_description: String::new(),
        }
    }

    /// True when all three fields are blank.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.meta_keywords.is_empty() && self.meta_description.is_empty()
    }
}
