//! Shared application state.

use std::sync::Arc;

use seo_pipeline::{FragmentStore, SeoPipeline};

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FragmentStore>,
    pub pipeline: SeoPipeline,
}
