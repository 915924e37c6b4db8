use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque inventory object identifier (e.g. "group-d1", "host-42")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One flat record of a full inventory traversal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: ObjectId,

    /// Display name (e.g. "Datacenter", "esx01.example.com")
    pub name: String,

    /// Managed object type (e.g. "Datacenter", "HostSystem")
    #[serde(rename = "type")]
    pub object_type: String,

    /// Absent for root objects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ObjectId>,
}

impl InventoryRecord {
    pub fn new(
        id: impl Into<ObjectId>,
        name: impl Into<String>,
        object_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            object_type: object_type.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<ObjectId>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_without_parent_deserializes() {
        let record: InventoryRecord = serde_json::from_value(json!({
            "id": "group-d1",
            "name": "Datacenters",
            "type": "Folder"
        }))
        .unwrap();

        assert_eq!(record.id.as_str(), "group-d1");
        assert_eq!(record.object_type, "Folder");
        assert!(record.parent.is_none());
    }

    #[test]
    fn test_record_serializes_type_and_skips_missing_parent() {
        let root = InventoryRecord::new("group-d1", "Datacenters", "Folder");
        let value = serde_json::to_value(&root).unwrap();
        assert_eq!(
            value,
            json!({"id": "group-d1", "name": "Datacenters", "type": "Folder"})
        );

        let child =
            InventoryRecord::new("datacenter-2", "DC1", "Datacenter").with_parent("group-d1");
        let value = serde_json::to_value(&child).unwrap();
        assert_eq!(value["parent"], "group-d1");
    }

    #[test]
    fn test_object_id_display() {
        let id = ObjectId::from("host-42");
        assert_eq!(id.to_string(), "host-42");
        assert_eq!(id, ObjectId::new(String::from("host-42")));
    }
}
