//! In-memory fragment store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::warn;
use uuid::Uuid;

use crate::error::Result;
use crate::traits::store::FragmentStore;
use crate::types::fragment::Fragment;

/// In-memory store over a set of root fragments.
///
/// Useful for tests and for running the server without a content file.
/// Cloning shares the underlying trees.
#[derive(Default, Clone)]
pub struct MemoryStore {
    roots: Arc<RwLock<Vec<Fragment>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root fragment.
    pub fn with_root(self, root: Fragment) -> Self {
        self.roots.write().unwrap().push(root);
        self
    }

    /// Snapshot of the current root fragments.
    pub fn roots(&self) -> Vec<Fragment> {
        self.roots.read().unwrap().clone()
    }
}

#[async_trait]
impl FragmentStore for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Fragment>> {
        Ok(self
            .roots
            .read()
            .unwrap()
            .iter()
            .find_map(|root| root.find(id).cloned()))
    }

    async fn find_by_type(&self, fragment_type: &str) -> Result<Vec<Fragment>> {
        Ok(self
            .roots
            .read()
            .unwrap()
            .iter()
            .flat_map(|root| root.descendants())
            .filter(|fragment| fragment.fragment_type == fragment_type)
            .cloned()
            .collect())
    }

    async fn update_properties(&self, id: Uuid, properties: &[(String, String)]) -> Result<()> {
        let mut roots = self.roots.write().unwrap();
        for root in roots.iter_mut() {
            if let Some(fragment) = root.find_mut(id) {
                for (name, value) in properties {
                    fragment.properties.insert(name.clone(), value.clone());
                }
                return Ok(());
            }
        }

        warn!(%id, "update_properties: no fragment with this id");
        Ok(())
    }
}
