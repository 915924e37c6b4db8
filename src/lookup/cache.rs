//! Id lookup cache with bulk refresh from an inventory source

use crate::error::Result;
use crate::inventory::{InventorySource, ObjectId};
use crate::logging::{Timer, log_error};
use crate::lookup::{CacheDump, CacheStore, RefreshPolicy};
use futures::TryStreamExt;
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;

/// Resolves inventory ids into names, types and parents
///
/// Every public lookup first checks freshness and, when stale, reloads the
/// whole inventory from the source before answering. The reload happens inside
/// the awaited lookup: there is no background task and no timeout, so a hung
/// source stalls the caller. Lookups take `&mut self`; tasks sharing one cache
/// wrap it in a `tokio::sync::Mutex`.
pub struct IdLookup<S> {
    /// Inventory source, shared with the owner of the session
    source: Arc<S>,

    store: CacheStore,

    policy: RefreshPolicy,
}

impl<S> fmt::Debug for IdLookup<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdLookup")
            .field("policy", &self.policy)
            .field("objects", &self.store.len())
            .field("last_refreshed_at", &self.store.last_refreshed_at())
            .finish_non_exhaustive()
    }
}

impl<S: InventorySource> IdLookup<S> {
    /// Create a new lookup cache with the default two minute TTL
    pub fn new(source: Arc<S>) -> Self {
        Self::with_policy(source, RefreshPolicy::default())
    }

    /// Create a new lookup cache with a custom refresh policy
    pub fn with_policy(source: Arc<S>, policy: RefreshPolicy) -> Self {
        tracing::info!(
            ttl_secs = ?policy.as_secs(),
            "Creating inventory id lookup cache"
        );

        Self {
            source,
            store: CacheStore::new(),
            policy,
        }
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RefreshPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// TTL in whole seconds, `None` when every lookup reloads
    pub fn ttl_secs(&self) -> Option<u64> {
        self.policy.as_secs()
    }

    /// Set the TTL in seconds; zero or negative reloads on every lookup
    pub fn set_ttl_secs(&mut self, secs: i64) -> &mut Self {
        self.set_policy(RefreshPolicy::from_secs(secs))
    }

    pub fn is_stale(&self) -> bool {
        self.policy
            .is_stale(self.store.last_refresh(), Instant::now())
    }

    /// Reload the id maps if they are stale
    pub async fn ensure_fresh(&mut self) -> Result<&mut Self> {
        if self.is_stale() {
            tracing::debug!(
                last_refreshed_at = ?self.store.last_refreshed_at(),
                "Id maps stale, refreshing from inventory"
            );
            self.refresh().await?;
        }
        Ok(self)
    }

    /// Reload every record from the inventory source
    ///
    /// Records are upserted as they arrive and the maps are never cleared, so
    /// ids that vanished from the inventory stay resolvable. If the source
    /// fails part-way, records already applied stay applied and the refresh
    /// time is left untouched, which makes the next lookup retry.
    pub async fn refresh(&mut self) -> Result<&mut Self> {
        let timer = Timer::new("inventory_refresh");

        if let Err(e) = self.apply_traversal().await {
            log_error("inventory_refresh", &e);
            return Err(e);
        }

        self.store.mark_refreshed();
        tracing::info!(
            objects = self.store.len(),
            duration_ms = timer.elapsed_ms(),
            "Refreshed inventory id maps"
        );
        Ok(self)
    }

    async fn apply_traversal(&mut self) -> Result<usize> {
        self.source.login().await?;
        tracing::debug!("Ready to fetch id/name/parent list");

        let mut records = self.source.fetch_full_traversal();
        let mut count = 0;
        while let Some(record) = records.try_next().await? {
            self.store.upsert(record);
            count += 1;
        }

        tracing::debug!(records = count, "Got id/name/parent list");
        Ok(count)
    }

    /// Display name for an id
    pub async fn name(&mut self, id: &ObjectId) -> Result<Option<String>> {
        self.ensure_fresh().await?;
        let name = self.store.name(id).map(str::to_string);
        tracing::trace!(id = %id, found = name.is_some(), "Name lookup");
        Ok(name)
    }

    /// Managed object type for an id
    pub async fn object_type(&mut self, id: &ObjectId) -> Result<Option<String>> {
        self.ensure_fresh().await?;
        let object_type = self.store.object_type(id).map(str::to_string);
        tracing::trace!(id = %id, found = object_type.is_some(), "Type lookup");
        Ok(object_type)
    }

    /// Parent id, `None` for roots and unknown ids
    pub async fn parent(&mut self, id: &ObjectId) -> Result<Option<ObjectId>> {
        self.ensure_fresh().await?;
        let parent = self.store.parent(id).cloned();
        tracing::trace!(id = %id, found = parent.is_some(), "Parent lookup");
        Ok(parent)
    }

    pub(crate) fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Copy of the cached maps, without refreshing
    pub fn dump(&self) -> CacheDump {
        self.store.dump()
    }

    /// Number of ids with a known name, without refreshing
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drop the cache and release its handle on the source
    ///
    /// The source itself stays open; closing its session is up to its owner.
    pub fn close(self) {
        tracing::debug!(
            objects = self.store.len(),
            source_refs = Arc::strong_count(&self.source) - 1,
            "Closing inventory id lookup cache"
        );
    }
}
