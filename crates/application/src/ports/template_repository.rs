//! Template repository port
//!
//! Defines the capability-set interface for template persistence used by
//! the surrounding CRUD surface and by resolver adapters.

use async_trait::async_trait;
use snipflow_domain::Template;

/// Errors that can occur during template store operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateStoreError {
    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Another template already owns the shortcut.
    #[error("shortcut already in use: {0}")]
    DuplicateShortcut(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for template persistence.
///
/// Shortcut uniqueness is enforced here, not by the expansion core.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Returns all templates.
    async fn get_all(&self) -> Result<Vec<Template>, TemplateStoreError>;

    /// Looks up the template bound to a shortcut, if any.
    async fn find_by_shortcut(
        &self,
        shortcut: &str,
    ) -> Result<Option<Template>, TemplateStoreError>;

    /// Adds a new template.
    ///
    /// # Errors
    ///
    /// Returns `TemplateStoreError::DuplicateShortcut` if the shortcut is
    /// already bound to another template.
    async fn add(&self, template: Template) -> Result<(), TemplateStoreError>;

    /// Updates an existing template, matched by id.
    ///
    /// # Errors
    ///
    /// Returns `TemplateStoreError::NotFound` if no template has the id,
    /// and `TemplateStoreError::DuplicateShortcut` if the new shortcut
    /// collides with a different template.
    async fn update(&self, template: Template) -> Result<(), TemplateStoreError>;

    /// Deletes a template by id.
    ///
    /// # Errors
    ///
    /// Returns `TemplateStoreError::NotFound` if no template has the id.
    async fn delete(&self, id: &str) -> Result<(), TemplateStoreError>;

    /// Checks whether a shortcut is bound to any template.
    async fn exists(&self, shortcut: &str) -> Result<bool, TemplateStoreError> {
        Ok(self.find_by_shortcut(shortcut).await?.is_some())
    }
}
