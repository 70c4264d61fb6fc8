//! Expansion engine
//!
//! Orchestrates one detection/expansion cycle: detector match, asynchronous
//! template lookup through the resolver port, re-validated application of
//! the result.

use std::collections::HashMap;

use crate::ports::{EditableField, TemplateResolver};

use super::detector::ShortcutDetector;
use super::expander::{ExpansionOutcome, expand};

/// Drives shortcut expansion for any number of fields.
///
/// Execution is cooperative and single-threaded from the caller's point of
/// view; the only suspension point is the resolver call. Cancellation of a
/// superseded lookup is logical: the late response is re-validated against
/// current field content and dropped if stale, never blindly applied.
pub struct ExpansionEngine<R> {
    resolver: R,
    detector: ShortcutDetector,
}

impl<R: TemplateResolver> ExpansionEngine<R> {
    /// Creates an engine backed by the given resolver.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            detector: ShortcutDetector::new(),
        }
    }

    /// Returns the detector, for inspecting per-field pending state.
    #[must_use]
    pub const fn detector(&self) -> &ShortcutDetector {
        &self.detector
    }

    /// Handles one text-mutation event on a field.
    ///
    /// Resolver errors are treated uniformly as "not found": the user sees
    /// their literal `/shortcut` text and nothing else happens.
    pub async fn handle_input<F: EditableField + ?Sized>(
        &mut self,
        field: &mut F,
        values: &HashMap<String, String>,
    ) -> ExpansionOutcome {
        let Some(matched) = self.detector.on_input(field) else {
            return ExpansionOutcome::NoMatch;
        };

        let resolved = match self.resolver.resolve(&matched.shortcut).await {
            Ok(template) => template,
            Err(_) => None,
        };

        let outcome = expand(field, &matched, resolved.as_ref(), values);
        self.detector.complete(field.id());
        outcome
    }
}
