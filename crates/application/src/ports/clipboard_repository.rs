//! Clipboard history repository port

use async_trait::async_trait;
use snipflow_domain::ClipboardItem;

/// Errors that can occur during clipboard store operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardStoreError {
    /// Entry not found.
    #[error("clipboard entry not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for clipboard history persistence.
///
/// Durability is best-effort local save only.
#[async_trait]
pub trait ClipboardRepository: Send + Sync {
    /// Returns all entries, oldest first.
    async fn get_all(&self) -> Result<Vec<ClipboardItem>, ClipboardStoreError>;

    /// Appends a captured entry.
    async fn add(&self, item: ClipboardItem) -> Result<(), ClipboardStoreError>;

    /// Deletes an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `ClipboardStoreError::NotFound` if no entry has the id.
    async fn delete(&self, id: &str) -> Result<(), ClipboardStoreError>;

    /// Returns the most recently captured entry, if any.
    async fn latest(&self) -> Result<Option<ClipboardItem>, ClipboardStoreError> {
        Ok(self.get_all().await?.into_iter().last())
    }
}
