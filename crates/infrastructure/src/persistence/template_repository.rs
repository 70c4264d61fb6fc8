//! Template repository implementations.
//!
//! Templates are stored as one JSON document (`templates.json`) under the
//! data directory. Shortcut uniqueness is enforced here, as a store-level
//! invariant.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use snipflow_application::ports::{TemplateRepository, TemplateStoreError};
use snipflow_domain::Template;
use tokio::fs;

/// File-based template repository.
///
/// Stores templates as:
/// ```text
/// data_dir/
///   templates.json
/// ```
#[derive(Debug, Clone)]
pub struct FileTemplateRepository {
    path: PathBuf,
}

impl FileTemplateRepository {
    /// Creates a repository rooted at the given data directory.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("templates.json"),
        }
    }

    async fn load(&self) -> Result<Vec<Template>, TemplateStoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| TemplateStoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(TemplateStoreError::Io(e)),
        }
    }

    async fn store(&self, templates: &[Template]) -> Result<(), TemplateStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(templates)
            .map_err(|e| TemplateStoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, bytes).await?;

        tracing::debug!(count = templates.len(), path = %self.path.display(), "saved templates");
        Ok(())
    }
}

#[async_trait]
impl TemplateRepository for FileTemplateRepository {
    async fn get_all(&self) -> Result<Vec<Template>, TemplateStoreError> {
        self.load().await
    }

    async fn find_by_shortcut(
        &self,
        shortcut: &str,
    ) -> Result<Option<Template>, TemplateStoreError> {
        let templates = self.load().await?;
        Ok(templates.into_iter().find(|t| t.shortcut == shortcut))
    }

    async fn add(&self, template: Template) -> Result<(), TemplateStoreError> {
        let mut templates = self.load().await?;

        if templates.iter().any(|t| t.shortcut == template.shortcut) {
            return Err(TemplateStoreError::DuplicateShortcut(template.shortcut));
        }

        templates.push(template);
        self.store(&templates).await
    }

    async fn update(&self, template: Template) -> Result<(), TemplateStoreError> {
        let mut templates = self.load().await?;

        if templates
            .iter()
            .any(|t| t.shortcut == template.shortcut && t.id != template.id)
        {
            return Err(TemplateStoreError::DuplicateShortcut(template.shortcut));
        }

        let Some(existing) = templates.iter_mut().find(|t| t.id == template.id) else {
            return Err(TemplateStoreError::NotFound(template.id));
        };
        *existing = template;

        self.store(&templates).await
    }

    async fn delete(&self, id: &str) -> Result<(), TemplateStoreError> {
        let mut templates = self.load().await?;

        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Err(TemplateStoreError::NotFound(id.to_string()));
        }

        self.store(&templates).await
    }
}

/// In-memory template repository, for tests and the demo binary.
#[derive(Debug, Default)]
pub struct InMemoryTemplateRepository {
    templates: Mutex<Vec<Template>>,
}

impl InMemoryTemplateRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with templates.
    ///
    /// # Errors
    ///
    /// Returns `TemplateStoreError::DuplicateShortcut` if two seeds share a
    /// shortcut.
    pub fn seeded(templates: Vec<Template>) -> Result<Self, TemplateStoreError> {
        let repository = Self::new();
        {
            let mut guard = repository.lock();
            for template in templates {
                if guard.iter().any(|t| t.shortcut == template.shortcut) {
                    return Err(TemplateStoreError::DuplicateShortcut(template.shortcut));
                }
                guard.push(template);
            }
        }
        Ok(repository)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Template>> {
        self.templates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn get_all(&self) -> Result<Vec<Template>, TemplateStoreError> {
        Ok(self.lock().clone())
    }

    async fn find_by_shortcut(
        &self,
        shortcut: &str,
    ) -> Result<Option<Template>, TemplateStoreError> {
        Ok(self.lock().iter().find(|t| t.shortcut == shortcut).cloned())
    }

    async fn add(&self, template: Template) -> Result<(), TemplateStoreError> {
        let mut templates = self.lock();

        if templates.iter().any(|t| t.shortcut == template.shortcut) {
            return Err(TemplateStoreError::DuplicateShortcut(template.shortcut));
        }

        templates.push(template);
        Ok(())
    }

    async fn update(&self, template: Template) -> Result<(), TemplateStoreError> {
        let mut templates = self.lock();

        if templates
            .iter()
            .any(|t| t.shortcut == template.shortcut && t.id != template.id)
        {
            return Err(TemplateStoreError::DuplicateShortcut(template.shortcut));
        }

        let Some(existing) = templates.iter_mut().find(|t| t.id == template.id) else {
            return Err(TemplateStoreError::NotFound(template.id));
        };
        *existing = template;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), TemplateStoreError> {
        let mut templates = self.lock();

        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Err(TemplateStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
