//! Rewrite id references on inventory objects into display names

use crate::error::Result;
use crate::inventory::{InventoryObject, InventorySource, ObjectId};
use crate::lookup::path::DEFAULT_PATH_SEPARATOR;
use crate::lookup::{CacheStore, IdLookup};

impl CacheStore {
    fn resolve(&self, raw_id: Option<&str>) -> Option<String> {
        raw_id
            .map(ObjectId::new)
            .and_then(|id| self.name(&id).map(str::to_string))
    }

    /// Enrich a single object in place
    ///
    /// `folder` and `parent` are always written. `runtime.host` and `vm` are
    /// only rewritten when the object carries them.
    pub fn enrich_object(&self, object: &mut InventoryObject, separator: &str) {
        object.folder = Some(match &object.id {
            Some(id) => self.name_path(id, separator),
            None => String::new(),
        });
        object.parent = self.resolve(object.parent.as_deref());

        if let Some(host) = object.runtime_host.as_deref() {
            object.runtime_host = self.resolve(Some(host));
        }

        if let Some(vms) = object.vm.as_mut() {
            for vm in vms.iter_mut() {
                *vm = self.resolve(vm.as_deref());
            }
        }
    }
}

impl<S: InventorySource> IdLookup<S> {
    /// Resolve folder, parent, host and vm references on every object
    pub async fn enrich_objects(&mut self, objects: &mut [InventoryObject]) -> Result<()> {
        self.enrich_objects_with_separator(objects, DEFAULT_PATH_SEPARATOR)
            .await
    }

    pub async fn enrich_objects_with_separator(
        &mut self,
        objects: &mut [InventoryObject],
        separator: &str,
    ) -> Result<()> {
        self.ensure_fresh().await?;

        let store = self.store();
        for object in objects.iter_mut() {
            store.enrich_object(object, separator);
        }

        tracing::debug!(objects = objects.len(), "Enriched inventory objects");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{InventoryRecord, MemorySource};
    use crate::lookup::cache::tests::chain;
    use serde_json::json;
    use std::sync::Arc;

    fn source() -> Arc<MemorySource> {
        let mut records = chain();
        records.push(InventoryRecord::new("vm-7", "vm1", "VirtualMachine").with_parent("host-42"));
        records.push(InventoryRecord::new("vm-8", "vm2", "VirtualMachine").with_parent("host-42"));
        Arc::new(MemorySource::new(records))
    }

    #[tokio::test]
    async fn test_enrich_sets_folder_and_parent_name() {
        let mut lookup = IdLookup::new(source());
        let mut objects = vec![InventoryObject::new("host-42").with_parent("domain-c7")];

        lookup.enrich_objects(&mut objects).await.unwrap();

        assert_eq!(objects[0].folder.as_deref(), Some("Datacenter -> Cluster"));
        assert_eq!(objects[0].parent.as_deref(), Some("Cluster"));
        assert!(objects[0].runtime_host.is_none());
        assert!(objects[0].vm.is_none());
    }

    #[tokio::test]
    async fn test_enrich_resolves_vm_list_in_order() {
        let mut lookup = IdLookup::new(source());
        let host = InventoryObject::new("host-42").with_vms(["vm-8", "vm-404", "vm-7"]);
        let mut objects = vec![host];

        lookup.enrich_objects(&mut objects).await.unwrap();

        assert_eq!(
            objects[0].vm,
            Some(vec![Some("vm2".to_string()), None, Some("vm1".to_string())])
        );
    }

    #[tokio::test]
    async fn test_enrich_resolves_runtime_host() {
        let mut lookup = IdLookup::new(source());
        let mut objects = vec![
            InventoryObject::new("vm-7")
                .with_parent("host-42")
                .with_runtime_host("host-42"),
            InventoryObject::new("vm-8").with_runtime_host("host-404"),
        ];

        lookup
            .enrich_objects_with_separator(&mut objects, "/")
            .await
            .unwrap();

        assert_eq!(objects[0].runtime_host.as_deref(), Some("Host"));
        assert_eq!(objects[0].folder.as_deref(), Some("Datacenter/Cluster/Host"));
        assert_eq!(objects[1].runtime_host, None);
        assert_eq!(objects[1].parent, None);
    }

    #[tokio::test]
    async fn test_enrich_leaves_other_fields_alone() {
        let source = source();
        let mut lookup = IdLookup::new(source.clone());
        let mut objects: Vec<InventoryObject> = serde_json::from_value(json!([
            {"parent": "domain-c7", "overallStatus": "green"},
            {"id": "datacenter-1", "name": "datacenter-1"}
        ]))
        .unwrap();

        lookup.enrich_objects(&mut objects).await.unwrap();

        assert_eq!(objects[0].folder.as_deref(), Some(""));
        assert_eq!(objects[0].parent.as_deref(), Some("Cluster"));
        assert_eq!(objects[0].extra["overallStatus"], "green");
        assert_eq!(objects[1].folder.as_deref(), Some(""));
        assert_eq!(objects[1].parent, None);
        assert_eq!(objects[1].extra["name"], "datacenter-1");

        let value = serde_json::to_value(&objects[1]).unwrap();
        assert!(value.get("runtime.host").is_none());
        assert!(value.get("vm").is_none());
        assert_eq!(source.fetch_count(), 1);
    }
}
