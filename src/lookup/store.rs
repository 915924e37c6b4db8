use crate::inventory::{InventoryRecord, ObjectId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tokio::time::Instant;

/// The three id maps plus the time they were last fully reloaded
#[derive(Debug, Default)]
pub struct CacheStore {
    id_to_name: HashMap<ObjectId, String>,
    id_to_type: HashMap<ObjectId, String>,
    id_to_parent: HashMap<ObjectId, ObjectId>,
    last_refresh: Option<Instant>,
    last_refreshed_at: Option<DateTime<Utc>>,
}

/// Point-in-time copy of the cache contents, sorted by id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheDump {
    pub names: BTreeMap<ObjectId, String>,
    pub types: BTreeMap<ObjectId, String>,
    pub parents: BTreeMap<ObjectId, ObjectId>,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entries for one record.
    ///
    /// Existing entries are never removed: a record without a parent leaves an
    /// earlier parent entry in place, and ids missing from a later traversal
    /// keep their old names. Retaining entries keeps lookups answering across
    /// partial traversals at the cost of serving objects that may be gone.
    pub fn upsert(&mut self, record: InventoryRecord) {
        let InventoryRecord {
            id,
            name,
            object_type,
            parent,
        } = record;

        if let Some(parent) = parent {
            self.id_to_parent.insert(id.clone(), parent);
        }
        self.id_to_type.insert(id.clone(), object_type);
        self.id_to_name.insert(id, name);
    }

    pub fn name(&self, id: &ObjectId) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    pub fn object_type(&self, id: &ObjectId) -> Option<&str> {
        self.id_to_type.get(id).map(String::as_str)
    }

    pub fn parent(&self, id: &ObjectId) -> Option<&ObjectId> {
        self.id_to_parent.get(id)
    }

    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    pub fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed_at
    }

    pub(crate) fn mark_refreshed(&mut self) {
        self.last_refresh = Some(Instant::now());
        self.last_refreshed_at = Some(Utc::now());
    }

    /// Number of ids with a known name
    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }

    pub fn dump(&self) -> CacheDump {
        CacheDump {
            names: sorted(&self.id_to_name),
            types: sorted(&self.id_to_type),
            parents: sorted(&self.id_to_parent),
            last_refreshed_at: self.last_refreshed_at,
        }
    }
}

fn sorted<V: Clone>(map: &HashMap<ObjectId, V>) -> BTreeMap<ObjectId, V> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}
