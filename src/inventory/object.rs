use crate::inventory::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A caller-owned inventory object whose id references get resolved to names
///
/// Only the well-known reference fields are typed. Everything else is kept in
/// `extra` and round-trips untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Parent id before enrichment, parent name after
    #[serde(default)]
    pub parent: Option<String>,

    /// Ancestor names joined into a path, written by enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Host id before enrichment, host name after (virtual machines only)
    #[serde(
        rename = "runtime.host",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub runtime_host: Option<String>,

    /// Virtual machine ids before enrichment, names after (hosts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm: Option<Vec<Option<String>>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InventoryObject {
    pub fn new(id: impl Into<ObjectId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_runtime_host(mut self, host: impl Into<String>) -> Self {
        self.runtime_host = Some(host.into());
        self
    }

    pub fn with_vms<I, T>(mut self, vms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.vm = Some(vms.into_iter().map(|vm| Some(vm.into())).collect());
        self
    }
}
