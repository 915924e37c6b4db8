//! Collaborators that hand full inventory traversals to the lookup cache

use crate::error::{InventoryError, Result};
use crate::inventory::InventoryRecord;
use futures::TryFutureExt;
use futures::stream::{self, BoxStream, StreamExt};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::sync::RwLock;

/// Source of flat inventory records
///
/// Implementations own session handling and traversal. Records may arrive in
/// any order and the same id may appear more than once; later entries win.
/// The stream may fail part-way, after some records were already yielded.
pub trait InventorySource: Send + Sync {
    /// Establish or refresh the session with the inventory
    fn login(&self) -> impl Future<Output = Result<()>> + Send;

    /// Stream every known object as a flat record
    fn fetch_full_traversal(&self) -> BoxStream<'_, Result<InventoryRecord>>;
}

/// In-memory source whose records can be swapped at runtime
#[derive(Debug, Default)]
pub struct MemorySource {
    records: RwLock<Vec<InventoryRecord>>,
    fetches: AtomicU64,
}

impl MemorySource {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            fetches: AtomicU64::new(0),
        }
    }

    /// Replace the records served by subsequent traversals
    pub async fn set_records(&self, records: Vec<InventoryRecord>) {
        *self.records.write().await = records;
    }

    /// Number of traversals served so far
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl InventorySource for MemorySource {
    async fn login(&self) -> Result<()> {
        Ok(())
    }

    fn fetch_full_traversal(&self) -> BoxStream<'_, Result<InventoryRecord>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);

        async move { Ok::<_, InventoryError>(self.records.read().await.clone()) }
            .map_ok(|records| stream::iter(records.into_iter().map(Ok::<_, InventoryError>)))
            .try_flatten_stream()
            .boxed()
    }
}

/// Source backed by a JSON snapshot file holding an array of records
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<InventoryRecord>> {
        let content = fs::read_to_string(&self.path).await?;
        let records: Vec<InventoryRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }
}

impl InventorySource for FileSource {
    async fn login(&self) -> Result<()> {
        match fs::metadata(&self.path).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(InventoryError::Login(format!(
                "{} is not a file",
                self.path.display()
            ))),
            Err(e) => Err(InventoryError::Login(format!(
                "cannot open {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn fetch_full_traversal(&self) -> BoxStream<'_, Result<InventoryRecord>> {
        tracing::debug!(path = %self.path.display(), "Reading inventory snapshot");

        self.read_records()
            .map_ok(|records| stream::iter(records.into_iter().map(Ok::<_, InventoryError>)))
            .try_flatten_stream()
            .boxed()
    }
}
