//! Snipflow Domain - Core business types
//!
//! This crate defines the domain model for the Snipflow expansion engine.
//! All types here are pure Rust with no I/O dependencies.

pub mod clipboard;
pub mod error;
pub mod field;
pub mod id;
pub mod placeholder;
pub mod template;

pub use clipboard::{ClipboardItem, ClipboardKind};
pub use error::{DomainError, DomainResult};
pub use field::{FieldId, FieldKind, MatchResult};
pub use id::generate_id;
pub use placeholder::{
    PlaceholderReference, extract_variable_names, parse_placeholders, substitute,
};
pub use template::Template;
