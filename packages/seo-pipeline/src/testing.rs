//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the pipeline without making
//! real backend calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{Result, SeoError};
use crate::traits::backend::GenerationBackend;
use crate::types::fragment::Fragment;

/// A mock generation backend for testing.
///
/// Returns queued canned payloads (or failures) in order; once the queue
/// is exhausted it answers with an all-empty SEO JSON object. Every call
/// is recorded for assertions. Cloning shares the queue and call log.
#[derive(Default, Clone)]
pub struct MockBackend {
    responses: Arc<RwLock<VecDeque<MockResponse>>>,
    calls: Arc<RwLock<Vec<MockBackendCall>>>,
}

enum MockResponse {
    Payload(String),
    Failure(String),
}

/// Record of a call made to the mock backend.
#[derive(Debug, Clone)]
pub struct MockBackendCall {
    /// How many instruction strings were sent
    pub instruction_count: usize,

    /// The user text sent alongside them
    pub user_text: String,
}

impl MockBackend {
    /// Create a new mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw payload to return.
    pub fn with_payload(self, payload: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push_back(MockResponse::Payload(payload.into()));
        self
    }

    /// Queue a transport failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push_back(MockResponse::Failure(message.into()));
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockBackendCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn complete(&self, instructions: &[&str], user_text: &str) -> Result<String> {
        self.calls.write().unwrap().push(MockBackendCall {
            instruction_count: instructions.len(),
            user_text: user_text.to_string(),
        });

        match self.responses.write().unwrap().pop_front() {
            Some(MockResponse::Payload(payload)) => Ok(payload),
            Some(MockResponse::Failure(message)) => Err(SeoError::Backend(message.into())),
            None => Ok(r#"{"summary":"","metaKeywords":"","metaDescription":""}"#.to_string()),
        }
    }
}

/// A small content tree for tests and demos: a page with a title, two
/// text children, and one non-text child.
pub fn sample_page() -> Fragment {
    Fragment::new("page")
        .with_property("title", "Village Bakery")
        .with_child(Fragment::new("text").with_property("text", "Fresh bread baked every morning."))
        .with_child(Fragment::new("text").with_property("text", "Find us at the market square."))
        .with_child(Fragment::new("image").with_property("alt", "storefront"))
}
