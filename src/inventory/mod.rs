//! Inventory data shapes and the sources that produce them

mod object;
mod source;
mod types;

pub use object::InventoryObject;
pub use source::{FileSource, InventorySource, MemorySource};
pub use types::{InventoryRecord, ObjectId};
