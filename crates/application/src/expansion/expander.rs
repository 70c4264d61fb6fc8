//! Template expander
//!
//! Applies a resolved template to a field by replacing the detected token
//! span, after re-validating that the field still holds the token.

use std::collections::HashMap;

use snipflow_domain::{MatchResult, Template, placeholder};

use crate::ports::EditableField;

/// Outcome of one detection/expansion cycle.
///
/// `Stale` and `NotFound` are ordinary outcomes of races and absences; the
/// user's text is left exactly as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionOutcome {
    /// The template body was inserted over the token span.
    Applied,
    /// The field changed between detection and resolution; dropped.
    Stale,
    /// No template is bound to the shortcut; dropped.
    NotFound,
    /// Nothing to do: ineligible field, no trailing token, or a lookup for
    /// the field was already in flight.
    NoMatch,
}

/// Expands a resolved template over the previously matched token.
///
/// Re-reads the field text and aborts silently unless the recorded span
/// still holds the original token, unextended. Content after the span is
/// preserved, so a match detected with the caret mid-document expands the
/// same way a match at the end of the field does. On success the caret
/// lands immediately after the inserted text and exactly one change
/// notification is dispatched.
pub fn expand<F: EditableField + ?Sized>(
    field: &mut F,
    matched: &MatchResult,
    template: Option<&Template>,
    values: &HashMap<String, String>,
) -> ExpansionOutcome {
    let text = field.text();

    // The span must still hold the exact token the detector saw.
    if text.get(matched.span.clone()) != Some(matched.token.as_str()) {
        return ExpansionOutcome::Stale;
    }

    // A word character right after the span means the user kept typing the
    // token (e.g. `/followup` became `/followup2`); the match is stale.
    let tail = &text[matched.span.end..];
    if tail
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
    {
        return ExpansionOutcome::Stale;
    }

    let Some(template) = template else {
        return ExpansionOutcome::NotFound;
    };

    let replacement = placeholder::substitute(&template.body, values);

    let mut new_text =
        String::with_capacity(text.len() - matched.token.len() + replacement.len());
    new_text.push_str(&text[..matched.span.start]);
    new_text.push_str(&replacement);
    new_text.push_str(tail);

    let caret = matched.span.start + replacement.len();
    field.set_text(new_text, caret);
    field.notify_changed();

    ExpansionOutcome::Applied
}
