//! The SEO pipeline: extraction, generation call, truncation.

pub mod extract;
pub mod generate;
pub mod markup;
pub mod prompts;
pub mod truncate;

pub use extract::{extract_text, DEFAULT_TEXT_PROPERTIES};
pub use generate::SeoPipeline;
pub use markup::{collapse_whitespace, strip_tags};
pub use prompts::{parse_seo_response, SEO_INSTRUCTIONS};
pub use truncate::truncate;
