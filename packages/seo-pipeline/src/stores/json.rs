//! JSON-file-backed fragment store.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Result, SeoError};
use crate::traits::store::FragmentStore;
use crate::types::fragment::Fragment;

/// Fragment store backed by a JSON file of root fragments.
///
/// The whole tree is held in memory; `update_properties` rewrites the
/// file so batch runs survive restarts. Concurrent processes writing the
/// same file are not supported.
pub struct JsonFileStore {
    path: PathBuf,
    roots: RwLock<Vec<Fragment>>,
}

impl JsonFileStore {
    /// Load the store from a JSON file containing an array of fragments.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path).map_err(|e| SeoError::Storage(Box::new(e)))?;
        let roots: Vec<Fragment> =
            serde_json::from_str(&raw).map_err(|e| SeoError::Storage(Box::new(e)))?;

        debug!(path = %path.display(), roots = roots.len(), "loaded content file");
        Ok(Self {
            path,
            roots: RwLock::new(roots),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn save(&self, roots: &[Fragment]) -> Result<()> {
        let raw =
            serde_json::to_string_pretty(roots).map_err(|e| SeoError::Storage(Box::new(e)))?;
        std::fs::write(&self.path, raw).map_err(|e| SeoError::Storage(Box::new(e)))
    }
}

#[async_trait]
impl FragmentStore for JsonFileStore {
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

        let Some(fragment) = roots.iter_mut().find_map(|root| root.find_mut(id)) else {
            warn!(%id, "update_properties: no fragment with this id");
            return Ok(());
        };

        for (name, value) in properties {
            fragment.properties.insert(name.clone(), value.clone());
        }

        self.save(roots.as_slice())
    }
}
