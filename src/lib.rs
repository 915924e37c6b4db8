pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod lookup;

pub use error::{InventoryError, Result};
pub use inventory::{InventoryObject, InventoryRecord, InventorySource, ObjectId};
pub use lookup::{IdLookup, RefreshPolicy};
