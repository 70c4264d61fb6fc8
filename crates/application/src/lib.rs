//! Snipflow Application - expansion core and ports
//!
//! This crate contains the shortcut expansion engine (detector, expander,
//! orchestrator), the placeholder-aware use cases, and the port traits
//! implemented by infrastructure adapters.

pub mod expansion;
pub mod ports;
pub mod use_cases;

pub use expansion::{ExpansionEngine, ExpansionOutcome, ShortcutDetector, expand};
pub use ports::{
    ClipboardRepository, ClipboardStoreError, EditableField, ResolveError, TemplateRepository,
    TemplateResolver, TemplateStoreError,
};
