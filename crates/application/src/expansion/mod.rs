//! Shortcut expansion core
//!
//! Detection of trailing `/shortcut` tokens, re-validated replacement of
//! the token span, and the orchestrating engine that ties detection to the
//! asynchronous template resolver.

mod detector;
mod engine;
mod expander;

pub use detector::ShortcutDetector;
pub use engine::ExpansionEngine;
pub use expander::{ExpansionOutcome, expand};
