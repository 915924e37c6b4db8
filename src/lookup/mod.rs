//! Id lookup cache for inventory objects
//!
//! Translates opaque inventory ids into names, types, parents and folder
//! paths, and rewrites id references on caller objects into names.
//!
//! Key features:
//! - Bulk refresh: one full traversal reloads every id at once
//! - TTL-based staleness: 2-minute default, or reload on every lookup
//! - Retention: refreshes upsert and never evict
//! - Errors from the source surface on the lookup that triggered the refresh

mod cache;
mod enrich;
mod path;
mod policy;
mod store;

pub use cache::IdLookup;
pub use path::DEFAULT_PATH_SEPARATOR;
pub use policy::{DEFAULT_TTL, RefreshPolicy};
pub use store::{CacheDump, CacheStore};
