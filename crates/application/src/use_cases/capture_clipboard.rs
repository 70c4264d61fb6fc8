//! Capture clipboard use case
//!
//! Validates and persists copied content into the clipboard history:
//! empty payloads are rejected, consecutive duplicates are ignored, and a
//! re-entrancy guard skips captures that arrive while one is in flight.
//! The guard is scoped to the use-case instance; give each capture source
//! its own [`CaptureClipboard`] so sources do not block one another.

use std::sync::atomic::{AtomicBool, Ordering};

use snipflow_domain::{ClipboardItem, DomainError};

use crate::ports::{ClipboardRepository, ClipboardStoreError};

/// Errors that can occur when capturing clipboard content.
#[derive(Debug, thiserror::Error)]
pub enum CaptureClipboardError {
    /// The payload failed domain validation.
    #[error("invalid clipboard payload: {0}")]
    Invalid(#[from] DomainError),

    /// The history store rejected the write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ClipboardStoreError> for CaptureClipboardError {
    fn from(error: ClipboardStoreError) -> Self {
        Self::Storage(error.to_string())
    }
}

/// Result of a capture attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A new history entry was saved.
    Saved(ClipboardItem),
    /// The content matches the most recent entry; nothing saved.
    Duplicate,
    /// Another capture was already in flight; skipped.
    Busy,
}

/// Captures copied content into the clipboard history.
pub struct CaptureClipboard<R> {
    repository: R,
    in_flight: AtomicBool,
}

impl<R: ClipboardRepository> CaptureClipboard<R> {
    /// Creates a new `CaptureClipboard` use case.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Executes the use case for one copy event.
    ///
    /// # Errors
    ///
    /// Returns `CaptureClipboardError::Invalid` for empty or
    /// whitespace-only payloads and `CaptureClipboardError::Storage` if the
    /// history store fails.
    pub async fn execute(&self, content: &str) -> Result<CaptureOutcome, CaptureClipboardError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Ok(CaptureOutcome::Busy);
        }

        let result = self.capture(content).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn capture(&self, content: &str) -> Result<CaptureOutcome, CaptureClipboardError> {
        let item = ClipboardItem::capture(content)?;

        if let Some(last) = self.repository.latest().await? {
            if last.content == item.content {
                return Ok(CaptureOutcome::Duplicate);
            }
        }

        self.repository.add(item.clone()).await?;
        Ok(CaptureOutcome::Saved(item))
    }
}
