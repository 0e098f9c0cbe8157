//! FragmentStore trait - the persistence collaborator.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::types::fragment::Fragment;

/// Persistence seam for content fragments.
///
/// The pipeline itself never touches storage. The HTTP handler and the
/// batch job load fragment trees from, and write updated SEO properties
/// back through, this trait.
#[async_trait]
pub trait FragmentStore: Send + Sync {
    /// Fetch the fragment subtree with the given id, searching all roots.
    ///
    /// An unknown id is `Ok(None)`; whether that is a warning or a 404 is
    /// the caller's call.
    async fn get(&self, id: Uuid) -> Result<Option<Fragment>>;

    /// All fragments of the given type, across all roots.
    async fn find_by_type(&self, fragment_type: &str) -> Result<Vec<Fragment>>;

    /// Write properties onto the fragment with the given id.
    async fn update_properties(&self, id: Uuid, properties: &[(String, String)]) -> Result<()>;
}
