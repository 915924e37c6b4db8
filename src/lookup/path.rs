//! Ancestor paths derived from the parent map

use crate::error::Result;
use crate::inventory::{InventorySource, ObjectId};
use crate::lookup::{CacheStore, IdLookup};

/// Separator used between ancestor names
pub const DEFAULT_PATH_SEPARATOR: &str = " -> ";

impl CacheStore {
    /// Ancestors of `id`, root first, `id` itself excluded.
    ///
    /// The parent map must be acyclic; a cycle makes this loop forever.
    pub fn path_to_id(&self, id: &ObjectId) -> Vec<ObjectId> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }

    /// Ancestor names joined by `separator`; unknown names render empty
    pub fn name_path(&self, id: &ObjectId, separator: &str) -> String {
        self.path_to_id(id)
            .iter()
            .map(|ancestor| self.name(ancestor).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<S: InventorySource> IdLookup<S> {
    /// Ancestor ids of `id` from the root down, excluding `id`
    pub async fn path_to_id(&mut self, id: &ObjectId) -> Result<Vec<ObjectId>> {
        self.ensure_fresh().await?;
        Ok(self.store().path_to_id(id))
    }

    /// Ancestor names joined with `" -> "`, e.g. "Datacenter -> Cluster"
    pub async fn name_path(&mut self, id: &ObjectId) -> Result<String> {
        self.name_path_with_separator(id, DEFAULT_PATH_SEPARATOR)
            .await
    }

    pub async fn name_path_with_separator(
        &mut self,
        id: &ObjectId,
        separator: &str,
    ) -> Result<String> {
        self.ensure_fresh().await?;
        Ok(self.store().name_path(id, separator))
    }
}
