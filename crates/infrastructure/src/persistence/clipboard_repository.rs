//! Clipboard history repository implementations.
//!
//! History is stored oldest-first in one JSON document (`clipboard.json`).
//! The file repository trims the oldest unpinned entries beyond a capacity
//! limit on every write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use snipflow_application::ports::{ClipboardRepository, ClipboardStoreError};
use snipflow_domain::ClipboardItem;
use tokio::fs;

/// Default number of history entries kept on disk.
pub const DEFAULT_CAPACITY: usize = 100;

/// File-based clipboard history repository with a capped length.
#[derive(Debug, Clone)]
pub struct FileClipboardRepository {
    path: PathBuf,
    capacity: usize,
}

impl FileClipboardRepository {
    /// Creates a repository rooted at the given data directory with the
    /// default capacity.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self::with_capacity(data_dir, DEFAULT_CAPACITY)
    }

    /// Creates a repository with an explicit capacity.
    #[must_use]
    pub fn with_capacity(data_dir: &Path, capacity: usize) -> Self {
        Self {
            path: data_dir.join("clipboard.json"),
            capacity,
        }
    }

    async fn load(&self) -> Result<Vec<ClipboardItem>, ClipboardStoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ClipboardStoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ClipboardStoreError::Io(e)),
        }
    }

    async fn store(&self, items: &[ClipboardItem]) -> Result<(), ClipboardStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(items)
            .map_err(|e| ClipboardStoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, bytes).await?;

        tracing::debug!(count = items.len(), path = %self.path.display(), "saved clipboard history");
        Ok(())
    }

    /// Drops the oldest unpinned entries until the history fits.
    fn trim(&self, items: &mut Vec<ClipboardItem>) {
        while items.len() > self.capacity {
            let Some(index) = items.iter().position(|i| !i.pinned) else {
                // Everything pinned; keep the overflow rather than drop
                // entries the user asked to keep.
                break;
            };
            items.remove(index);
        }
    }
}

#[async_trait]
impl ClipboardRepository for FileClipboardRepository {
    async fn get_all(&self) -> Result<Vec<ClipboardItem>, ClipboardStoreError> {
        self.load().await
    }

    async fn add(&self, item: ClipboardItem) -> Result<(), ClipboardStoreError> {
        let mut items = self.load().await?;
        items.push(item);
        self.trim(&mut items);
        self.store(&items).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClipboardStoreError> {
        let mut items = self.load().await?;

        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(ClipboardStoreError::NotFound(id.to_string()));
        }

        self.store(&items).await
    }
}

/// In-memory clipboard history, for tests and the demo binary.
#[derive(Debug, Default)]
pub struct InMemoryClipboardRepository {
    items: Mutex<Vec<ClipboardItem>>,
}

impl InMemoryClipboardRepository {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ClipboardItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ClipboardRepository for InMemoryClipboardRepository {
    async fn get_all(&self) -> Result<Vec<ClipboardItem>, ClipboardStoreError> {
        Ok(self.lock().clone())
    }

    async fn add(&self, item: ClipboardItem) -> Result<(), ClipboardStoreError> {
        self.lock().push(item);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ClipboardStoreError> {
        let mut items = self.lock();

        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(ClipboardStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
