//! Typed errors for the SEO pipeline library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during SEO generation operations.
///
/// An unparseable backend *payload* is deliberately not represented here:
/// the pipeline degrades to empty fields instead of erroring. Only
/// transport, storage, and configuration failures surface as errors.
#[derive(Debug, Error)]
pub enum SeoError {
    /// Generation backend unreachable or failed
    #[error("generation backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for SEO operations.
pub type Result<T> = std::result::Result<T, SeoError>;
