//! Placeholder parser for `{variable}` syntax
//!
//! Template bodies reference substitutable content as `{name}` tokens,
//! where `name` is one or more word characters (letters, digits,
//! underscore). Malformed braces (`{}`, unmatched `{`, non-word content)
//! do not match and are not reported.

use std::collections::HashMap;
use std::ops::Range;

/// Represents a parsed placeholder reference in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderReference {
    /// The variable name (without braces).
    pub name: String,

    /// Byte range in the original string where this reference appears,
    /// including the braces.
    pub span: Range<usize>,
}

impl PlaceholderReference {
    /// Creates a new placeholder reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Returns true for characters allowed inside a placeholder name.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parses a string and extracts all placeholder references in order of
/// appearance.
///
/// # Examples
///
/// ```
/// use snipflow_domain::placeholder::parse_placeholders;
///
/// let refs = parse_placeholders("Hi {name}, re: {topic}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "name");
/// assert_eq!(refs[1].name, "topic");
/// ```
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<PlaceholderReference> {
    let mut references = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch != '{' {
            continue;
        }

        let mut name = String::new();
        let mut end = None;

        while let Some(&(i, c)) = chars.peek() {
            if c == '}' {
                chars.next();
                if !name.is_empty() {
                    end = Some(i + c.len_utf8());
                }
                break;
            }
            if is_word_char(c) {
                name.push(c);
                chars.next();
            } else {
                // Not a placeholder; leave the offending character for the
                // outer loop so a nested `{` can start a fresh match.
                break;
            }
        }

        if let Some(end) = end {
            references.push(PlaceholderReference::new(name, start..end));
        }
    }

    references
}

/// Extracts the distinct variable names from the input, in order of first
/// occurrence.
#[must_use]
pub fn extract_variable_names(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for reference in parse_placeholders(input) {
        if !names.contains(&reference.name) {
            names.push(reference.name);
        }
    }
    names
}

/// Substitutes placeholder values into the input string.
///
/// Each `{name}` occurrence whose name is present in `values` is replaced
/// by the mapped value; unknown names are left untouched as literal text.
#[must_use]
pub fn substitute(input: &str, values: &HashMap<String, String>) -> String {
    let references = parse_placeholders(input);

    if references.is_empty() {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;

    for reference in &references {
        result.push_str(&input[last_end..reference.span.start]);

        if let Some(value) = values.get(&reference.name) {
            result.push_str(value);
        } else {
            // Keep the original {name} for unknown variables
            result.push_str(&input[reference.span.clone()]);
        }

        last_end = reference.span.end;
    }

    result.push_str(&input[last_end..]);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_placeholder() {
        let refs = parse_placeholders("{name}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "name");
        assert_eq!(refs[0].span, 0..6);
    }

    #[test]
    fn test_parse_multiple_placeholders() {
        let refs = parse_placeholders("Hi {name}, following up on {topic}.");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name, "name");
        assert_eq!(refs[1].name, "topic");
    }

    #[test]
    fn test_no_placeholders() {
        let refs = parse_placeholders("Hello, World!");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_empty_braces_ignored() {
        let refs = parse_placeholders("{}");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_unmatched_brace_ignored() {
        let refs = parse_placeholders("{name");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_non_word_content_ignored() {
        let refs = parse_placeholders("{first name}");
        assert!(refs.is_empty());
    }

    #[test]
    fn test_nested_open_brace_restarts_match() {
        let refs = parse_placeholders("{a{b}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "b");
    }

    #[test]
    fn test_placeholder_with_underscores_and_digits() {
        let refs = parse_placeholders("{order_id2}");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "order_id2");
    }

    #[test]
    fn test_adjacent_placeholders() {
        let refs = parse_placeholders("{a}{b}{c}");
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].name, "a");
        assert_eq!(refs[1].name, "b");
        assert_eq!(refs[2].name, "c");
    }

    #[test]
    fn test_span_positions() {
        let input = "Hello {name}, welcome!";
        let refs = parse_placeholders(input);
        assert_eq!(refs.len(), 1);
        assert_eq!(&input[refs[0].span.clone()], "{name}");
    }

    #[test]
    fn test_extract_names_distinct_first_occurrence() {
        let names = extract_variable_names("{a} and {a} and {b}");
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_extract_names_empty_input() {
        let names = extract_variable_names("");
        assert!(names.is_empty());
    }

    #[test]
    fn test_substitute_known_values() {
        let mut values = HashMap::new();
        values.insert("name".to_string(), "Ada".to_string());

        let result = substitute("Hi {name}!", &values);
        assert_eq!(result, "Hi Ada!");
    }

    #[test]
    fn test_substitute_unknown_left_intact() {
        let values = HashMap::new();
        let result = substitute("Hi {name}!", &values);
        assert_eq!(result, "Hi {name}!");
    }

    #[test]
    fn test_substitute_mixed() {
        let mut values = HashMap::new();
        values.insert("a".to_string(), "1".to_string());

        let result = substitute("{a} and {b}", &values);
        assert_eq!(result, "1 and {b}");
    }

    #[test]
    fn test_substitute_repeated_occurrences() {
        let mut values = HashMap::new();
        values.insert("a".to_string(), "x".to_string());

        let result = substitute("{a} {a} {a}", &values);
        assert_eq!(result, "x x x");
    }

    #[test]
    fn test_substitute_no_placeholders_returns_input() {
        let values = HashMap::new();
        assert_eq!(substitute("plain text", &values), "plain text");
    }
}
