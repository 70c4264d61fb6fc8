//! Shortcut detector
//!
//! Recognizes a trailing `/shortcut` token in the text immediately
//! preceding the caret of an eligible field, and guards against more than
//! one in-flight lookup per field.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use snipflow_domain::{FieldId, MatchResult};

use crate::ports::EditableField;

/// A `/` followed by one or more word characters, anchored to the end of
/// the text up to the caret.
#[allow(clippy::expect_used)]
static TRAILING_SHORTCUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\w+)$").expect("pattern is a valid literal"));

/// Observes text-mutation events and detects shortcut tokens.
///
/// Pending lookups are tracked per field, keyed by [`FieldId`]; a single
/// shared flag would drop detections on one field while another field's
/// lookup is outstanding.
#[derive(Debug, Default)]
pub struct ShortcutDetector {
    pending: HashSet<FieldId>,
}

impl ShortcutDetector {
    /// Creates a detector with no pending lookups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches a trailing shortcut token in text-up-to-caret.
    ///
    /// Returns the token span relative to the start of `prefix`, which is
    /// also its span within the full field text.
    #[must_use]
    pub fn detect(prefix: &str) -> Option<MatchResult> {
        let caps = TRAILING_SHORTCUT.captures(prefix)?;
        let token = caps.get(0)?;
        let shortcut = caps.get(1)?.as_str();
        Some(MatchResult::new(shortcut, token.start()..token.end()))
    }

    /// Handles one text-mutation event on a field.
    ///
    /// Returns a match to look up, or `None` when the field is ineligible,
    /// a lookup for this field is already in flight, or no trailing token
    /// precedes the caret.
    pub fn on_input<F: EditableField + ?Sized>(&mut self, field: &F) -> Option<MatchResult> {
        if !field.kind().is_eligible() {
            return None;
        }

        let id = field.id();
        if self.pending.contains(&id) {
            return None;
        }

        let text = field.text();
        let caret = field.caret().min(text.len());
        let prefix = text.get(..caret)?;

        let matched = Self::detect(prefix)?;
        self.pending.insert(id);
        Some(matched)
    }

    /// Marks the field's in-flight lookup as finished, whatever its
    /// outcome, so later shortcuts in the same field can trigger again.
    pub fn complete(&mut self, id: FieldId) {
        self.pending.remove(&id);
    }

    /// Returns true if a lookup for the field is in flight.
    #[must_use]
    pub fn is_pending(&self, id: FieldId) -> bool {
        self.pending.contains(&id)
    }
}
