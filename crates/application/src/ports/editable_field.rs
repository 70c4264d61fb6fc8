//! Editable field port
//!
//! The mutation surface a host binding provides for a single text-bearing
//! field. The core holds a reference only for the duration of one
//! detection/expansion cycle, never a persistent handle.

use snipflow_domain::{FieldId, FieldKind};

/// A focusable text-bearing field the engine may observe and mutate.
///
/// Offsets are byte offsets into the text returned by [`Self::text`].
pub trait EditableField {
    /// Stable identity for keying per-field engine state.
    fn id(&self) -> FieldId;

    /// The kind of surface this field exposes, used for eligibility.
    fn kind(&self) -> FieldKind;

    /// Returns the current text content.
    fn text(&self) -> String;

    /// Returns the current caret offset within the text.
    fn caret(&self) -> usize;

    /// Replaces the content and positions the caret.
    fn set_text(&mut self, text: String, caret: usize);

    /// Fires a change notification observable by third-party host scripts.
    fn notify_changed(&mut self);
}
