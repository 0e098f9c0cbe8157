//! SEO Metadata Generation Pipeline
//!
//! Extracts plain text from a tree of content fragments, sends it to a
//! generation backend, and post-processes the response into three bounded
//! SEO fields: summary (200 chars), meta keywords (255 chars), and meta
//! description (160 chars).
//!
//! # Design Philosophy
//!
//! - Extraction, one backend call, local truncation; nothing else
//! - The backend is an injected capability, substitutable with a mock
//! - A malformed backend payload degrades to empty fields, never an error
//! - Transport failures are the caller's problem, propagated unchanged
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use seo_pipeline::{Fragment, SeoPipeline};
//! use seo_pipeline::ai::OpenAiBackend;
//!
//! let backend = OpenAiBackend::from_env()?;
//! let pipeline = SeoPipeline::new(Arc::new(backend));
//!
//! let page = Fragment::new("page")
//!     .with_child(Fragment::new("text").with_property("text", "Fresh bread daily"));
//! let fields = pipeline.generate(&page).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (ContentFragment, GenerationBackend, FragmentStore)
//! - [`types`] - Fragment tree and SEO field types
//! - [`pipeline`] - Extraction, prompts, truncation, and the pipeline itself
//! - [`ai`] - Backend implementations (OpenAI)
//! - [`stores`] - Storage implementations (MemoryStore, JsonFileStore)
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use ai::OpenAiBackend;
pub use error::SeoError;
pub use pipeline::{
    extract_text, parse_seo_response, truncate, SeoPipeline, DEFAULT_TEXT_PROPERTIES,
    SEO_INSTRUCTIONS,
};
pub use stores::{JsonFileStore, MemoryStore};
pub use testing::MockBackend;
pub use traits::{
    backend::GenerationBackend,
    fragment::{ContentFragment, Descendants},
    store::FragmentStore,
};
pub use types::{
    fragment::Fragment,
    seo::{
        SeoFields, SeoSuggestion, META_DESCRIPTION_BUDGET, META_KEYWORDS_BUDGET, SUMMARY_BUDGET,
    },
};
