//! Application use cases

mod capture_clipboard;

pub use capture_clipboard::{CaptureClipboard, CaptureClipboardError, CaptureOutcome};
