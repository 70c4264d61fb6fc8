//! Persistence adapters
//!
//! Repositories store their documents as single JSON files under a data
//! directory. Durability is best-effort local save.

mod clipboard_repository;
mod template_repository;

pub use clipboard_repository::{FileClipboardRepository, InMemoryClipboardRepository};
pub use template_repository::{FileTemplateRepository, InMemoryTemplateRepository};
