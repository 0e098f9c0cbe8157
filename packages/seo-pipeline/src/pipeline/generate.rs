//! The pipeline itself - extraction, one backend call, truncation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::pipeline::extract::{extract_text, DEFAULT_TEXT_PROPERTIES};
use crate::pipeline::prompts::{parse_seo_response, SEO_INSTRUCTIONS};
use crate::pipeline::truncate::truncate;
use crate::traits::backend::GenerationBackend;
use crate::traits::fragment::ContentFragment;
use crate::types::seo::{
    SeoFields, META_DESCRIPTION_BUDGET, META_KEYWORDS_BUDGET, SUMMARY_BUDGET,
};

/// Turns fragment trees into bounded SEO fields.
///
/// Holds the injected generation backend and the list of property names
/// to harvest text from. Stateless across calls: each [`generate`]
/// performs one extraction, one backend call, and local truncation, so
/// callers may run any number of invocations concurrently.
///
/// [`generate`]: SeoPipeline::generate
#[derive(Clone)]
pub struct SeoPipeline {
    backend: Arc<dyn GenerationBackend>,
    property_names: Vec<String>,
}

impl SeoPipeline {
    /// Create a pipeline harvesting the default `text` property.
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            property_names: DEFAULT_TEXT_PROPERTIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    /// Replace the harvested property names.
    pub fn with_property_names(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.property_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Property names currently harvested.
    pub fn property_names(&self) -> &[String] {
        &self.property_names
    }

    /// Generate SEO fields for the fragment tree rooted at `root`.
    ///
    /// Backend transport failures propagate unchanged. An unparseable
    /// payload degrades to empty fields instead of erroring; the editor
    /// widget treats blanks as "nothing to suggest".
    pub async fn generate<F: ContentFragment>(&self, root: &F) -> Result<SeoFields> {
        let text = extract_text(root, &self.property_names);
        debug!(chars = text.chars().count(), "sending extracted text to backend");

        let payload = self.backend.complete(SEO_INSTRUCTIONS, &text).await?;

        match parse_seo_response(&payload) {
            Ok(suggestion) => Ok(SeoFields {
                summary: truncate(&suggestion.summary, SUMMARY_BUDGET),
                meta_keywords: truncate(&suggestion.meta_keywords, META_KEYWORDS_BUDGET),
                meta_description: truncate(&suggestion.meta_description, META_DESCRIPTION_BUDGET),
            }),
            Err(error) => {
                warn!(%error, "backend payload was not valid SEO JSON, returning empty fields");
                Ok(SeoFields::empty())
            }
        }
    }
}
