//! In-process editable field binding
//!
//! [`BufferField`] implements the field mutation surface over a plain text
//! buffer with a caret, standing in for a host-page DOM binding in the
//! demo binary and tests.

use snipflow_application::ports::EditableField;
use snipflow_domain::{FieldId, FieldKind};

/// An editable text buffer with a caret and a change-notification counter.
#[derive(Debug, Clone)]
pub struct BufferField {
    id: FieldId,
    kind: FieldKind,
    text: String,
    caret: usize,
    notifications: u64,
}

impl BufferField {
    /// Creates an empty field of the given kind.
    #[must_use]
    pub const fn new(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            text: String::new(),
            caret: 0,
            notifications: 0,
        }
    }

    /// Inserts text at the caret, moving the caret past it, as typing
    /// would.
    pub fn type_text(&mut self, text: &str) {
        self.text.insert_str(self.caret, text);
        self.caret += text.len();
    }

    /// Number of change notifications dispatched on this field.
    #[must_use]
    pub const fn notifications(&self) -> u64 {
        self.notifications
    }
}

impl EditableField for BufferField {
    fn id(&self) -> FieldId {
        self.id
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_text(&mut self, text: String, caret: usize) {
        self.caret = caret.min(text.len());
        self.text = text;
    }

    fn notify_changed(&mut self) {
        self.notifications += 1;
    }
}
