//! GenerationBackend trait - the external text-generation collaborator.

use async_trait::async_trait;

use crate::error::Result;

/// The external text-generation service.
///
/// Implementations wrap a specific provider and handle transport only.
/// The pipeline sends a fixed ordered instruction sequence plus the
/// extracted page text and expects a raw text payload back; parsing that
/// payload is the pipeline's job, not the backend's.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send the instruction sequence and user text, returning the raw
    /// response payload.
    ///
    /// Transport failures surface as [`crate::error::SeoError::Backend`]
    /// and are propagated to the caller unchanged; the pipeline does not
    /// retry.
    async fn complete(&self, instructions: &[&str], user_text: &str) -> Result<String>;
}
