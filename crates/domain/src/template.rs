//! Email template domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::generate_id;
use crate::placeholder::extract_variable_names;

/// A named block of text bound to a shortcut, insertable into an editable
/// field.
///
/// The `variables` list is derived from the body and subject and is kept in
/// sync by [`Template::refresh_variables`]; mutating accessors call it so
/// the stored list always equals the current extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier, assigned at creation.
    pub id: String,

    /// Display name.
    pub name: String,

    /// The lookup key, typed as `/shortcut` to trigger expansion.
    /// Uniqueness across templates is a store-level invariant.
    pub shortcut: String,

    /// Optional subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Body text, may contain `{variable}` placeholders.
    pub body: String,

    /// Distinct variable names referenced by body and subject, in order of
    /// first occurrence.
    #[serde(default)]
    pub variables: Vec<String>,

    /// Optional grouping category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Creates a new template with a generated id and derived variables.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is empty and
    /// `DomainError::InvalidShortcut` if the shortcut is empty or contains
    /// non-word characters.
    pub fn new(
        name: impl Into<String>,
        shortcut: impl Into<String>,
        body: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let shortcut = shortcut.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidName(name));
        }
        if !is_valid_shortcut(&shortcut) {
            return Err(DomainError::InvalidShortcut(shortcut));
        }

        let now = Utc::now();
        let mut template = Self {
            id: generate_id(),
            name,
            shortcut,
            subject: None,
            body: body.into(),
            variables: Vec::new(),
            category: None,
            created_at: now,
            updated_at: now,
        };
        template.refresh_variables();

        Ok(template)
    }

    /// Sets the subject line and re-derives the variable list.
    pub fn set_subject(&mut self, subject: Option<String>) {
        self.subject = subject;
        self.refresh_variables();
        self.touch();
    }

    /// Sets the body text and re-derives the variable list.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.refresh_variables();
        self.touch();
    }

    /// Sets the category.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.touch();
    }

    /// Recomputes the derived variable list from body and subject.
    ///
    /// Body variables come first, then subject-only variables, each listed
    /// once in order of first occurrence.
    pub fn refresh_variables(&mut self) {
        let mut names = extract_variable_names(&self.body);
        if let Some(subject) = &self.subject {
            for name in extract_variable_names(subject) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        self.variables = names;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Validates a shortcut: one or more word characters (letters, digits,
/// underscore), no leading `/`.
#[must_use]
pub fn is_valid_shortcut(shortcut: &str) -> bool {
    !shortcut.is_empty() && shortcut.chars().all(|c| c.is_alphanumeric() || c == '_')
}
