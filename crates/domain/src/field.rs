//! Editable field identity and shortcut match types.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Opaque identity of a focusable text-bearing field.
///
/// The engine never holds a persistent handle to the field itself; per-field
/// state (such as the in-flight lookup guard) is keyed by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(u64);

impl FieldId {
    /// Creates a field id from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The kind of text surface a field exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A content-editable rich-text region.
    ContentEditable,
    /// A plain multi-line text input.
    MultilineText,
    /// An element exposing a textbox accessibility role.
    TextboxRole,
    /// Anything else; never observed or mutated.
    Other,
}

impl FieldKind {
    /// Returns true if the detector is permitted to observe this field.
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A recognized shortcut token and its span at the moment of detection.
///
/// Ephemeral: the field content may change between detection and the
/// asynchronous template lookup, so the span must be re-validated against
/// current content before any expansion is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The full token as typed, including the leading `/`.
    pub token: String,

    /// The shortcut identifier, without the leading `/`.
    pub shortcut: String,

    /// Byte range of the token within the field text at detection time.
    pub span: Range<usize>,
}

impl MatchResult {
    /// Creates a match result for a shortcut identifier and its token span.
    #[must_use]
    pub fn new(shortcut: impl Into<String>, span: Range<usize>) -> Self {
        let shortcut = shortcut.into();
        Self {
            token: format!("/{shortcut}"),
            shortcut,
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eligibility() {
        assert!(FieldKind::ContentEditable.is_eligible());
        assert!(FieldKind::MultilineText.is_eligible());
        assert!(FieldKind::TextboxRole.is_eligible());
        assert!(!FieldKind::Other.is_eligible());
    }

    #[test]
    fn test_match_result_token() {
        let matched = MatchResult::new("followup", 3..12);
        assert_eq!(matched.token, "/followup");
        assert_eq!(matched.shortcut, "followup");
        assert_eq!(matched.span, 3..12);
    }

    #[test]
    fn test_field_id_round_trip() {
        let id = FieldId::new(42);
        assert_eq!(id.raw(), 42);
    }
}
