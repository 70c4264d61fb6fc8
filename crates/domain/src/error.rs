//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The shortcut contains characters outside the word-character class.
    #[error("invalid shortcut: {0}")]
    InvalidShortcut(String),

    /// A required name is empty or malformed.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The clipboard payload is empty or whitespace-only.
    #[error("empty clipboard content")]
    EmptyClipboardContent,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
