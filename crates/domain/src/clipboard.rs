//! Clipboard history domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::id::generate_id;

/// Classification of captured clipboard content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardKind {
    /// Plain text.
    Text,
    /// Content that parses as an absolute URL.
    Url,
}

/// A single entry in the clipboard history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    /// Unique identifier, assigned at capture.
    pub id: String,

    /// Content classification.
    pub kind: ClipboardKind,

    /// The captured text.
    pub content: String,

    /// Pinned entries survive history trimming.
    #[serde(default)]
    pub pinned: bool,

    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Capture timestamp.
    pub captured_at: DateTime<Utc>,
}

impl ClipboardItem {
    /// Captures clipboard content as a history entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyClipboardContent` if the content is empty
    /// or whitespace-only.
    pub fn capture(content: impl Into<String>) -> DomainResult<Self> {
        let content = content.into();

        if content.trim().is_empty() {
            return Err(DomainError::EmptyClipboardContent);
        }

        let kind = if Url::parse(content.trim()).is_ok() {
            ClipboardKind::Url
        } else {
            ClipboardKind::Text
        };

        Ok(Self {
            id: generate_id(),
            kind,
            content,
            pinned: false,
            tags: Vec::new(),
            captured_at: Utc::now(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capture_text() {
        let item = ClipboardItem::capture("some notes").unwrap();
        assert_eq!(item.kind, ClipboardKind::Text);
        assert_eq!(item.content, "some notes");
        assert!(!item.pinned);
    }

    #[test]
    fn test_capture_url() {
        let item = ClipboardItem::capture("https://example.com/page").unwrap();
        assert_eq!(item.kind, ClipboardKind::Url);
    }

    #[test]
    fn test_relative_url_is_text() {
        let item = ClipboardItem::capture("example.com/page").unwrap();
        assert_eq!(item.kind, ClipboardKind::Text);
    }

    #[test]
    fn test_capture_rejects_empty() {
        assert!(matches!(
            ClipboardItem::capture(""),
            Err(DomainError::EmptyClipboardContent)
        ));
        assert!(matches!(
            ClipboardItem::capture("   \n\t"),
            Err(DomainError::EmptyClipboardContent)
        ));
    }
}
