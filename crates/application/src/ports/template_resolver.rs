//! Template resolution port
//!
//! The asynchronous request/response channel between the detector and the
//! template store. Latency and transport are unspecified; the core only
//! assumes eventual delivery or never-delivery.

use async_trait::async_trait;
use snipflow_domain::Template;

/// Errors that can occur while resolving a shortcut.
///
/// The expansion engine treats every resolver error as "not found"; absence
/// of a matching shortcut is a normal outcome, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The resolver endpoint is gone (channel closed, service stopped).
    #[error("resolver unavailable")]
    Unavailable,

    /// The backing store reported an error.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Resolves a shortcut identifier to its template.
#[async_trait]
pub trait TemplateResolver: Send + Sync {
    /// Resolves the template bound to `shortcut`, without the leading `/`.
    ///
    /// # Errors
    ///
    /// Returns a `ResolveError` if the lookup could not be performed at
    /// all; `Ok(None)` means no template is bound to the shortcut.
    async fn resolve(&self, shortcut: &str) -> Result<Option<Template>, ResolveError>;
}
