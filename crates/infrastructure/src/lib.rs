//! Snipflow Infrastructure - adapters
//!
//! Implementations of the application ports: file-backed and in-memory
//! repositories, the channel-based template resolver service, and an
//! in-process editable field binding.

pub mod fields;
pub mod persistence;
pub mod resolver;

pub use fields::BufferField;
pub use persistence::{
    FileClipboardRepository, FileTemplateRepository, InMemoryClipboardRepository,
    InMemoryTemplateRepository,
};
pub use resolver::{ChannelTemplateResolver, ResolverService};
