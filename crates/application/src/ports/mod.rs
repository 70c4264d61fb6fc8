//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the expansion core and external
//! systems. Each port is a trait that can be implemented by adapters in the
//! infrastructure layer (or by the host binding, for fields).

mod clipboard_repository;
mod editable_field;
mod template_repository;
mod template_resolver;

pub use clipboard_repository::{ClipboardRepository, ClipboardStoreError};
pub use editable_field::EditableField;
pub use template_repository::{TemplateRepository, TemplateStoreError};
pub use template_resolver::{ResolveError, TemplateResolver};
