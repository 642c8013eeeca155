//! Directive argument parsing.
//!
//! Parses the `[content]{#id .class key="value"}` part of a directive.

use std::collections::HashMap;

/// Parsed arguments from directive syntax.
///
/// Represents the content and attributes extracted from a directive:
/// `:::details[Show the output]{.wide open=true}`
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::DirectiveArgs;
///
/// let args = DirectiveArgs::parse("python Python", r#"#setup .wide note="pinned""#);
/// assert_eq!(args.content, "python Python");
/// assert_eq!(args.id, Some("setup".to_owned()));
/// assert_eq!(args.classes, vec!["wide"]);
/// assert_eq!(args.get("note"), Some("pinned"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Content from brackets: `[content]` (empty string if not provided).
    pub content: String,
    /// ID from attributes: `{#id}`.
    pub id: Option<String>,
    /// Classes from attributes: `{.class1 .class2}`.
    pub classes: Vec<String>,
    /// Key-value attributes: `{key="value"}`.
    pub attrs: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse content and the attribute string (without braces).
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Default::default()
        };

        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            if let Some(rest) = remaining.strip_prefix('#') {
                let end = token_end(rest);
                args.id = Some(rest[..end].to_owned());
                remaining = &rest[end..];
            } else if let Some(rest) = remaining.strip_prefix('.') {
                let end = token_end(rest);
                args.classes.push(rest[..end].to_owned());
                remaining = &rest[end..];
            } else if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest;
            } else {
                // Bare word without `=`: treat as a flag
                let end = remaining
                    .find(char::is_whitespace)
                    .unwrap_or(remaining.len());
                args.attrs.insert(remaining[..end].to_owned(), String::new());
                remaining = &remaining[end..];
            }
            remaining = remaining.trim_start();
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Whether a boolean attribute is set.
    ///
    /// `{open}`, `{open=true}` and `{open="yes"}` are set; `{open=false}` and
    /// `{open="no"}` are not.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| !matches!(v, "false" | "no" | "0"))
    }

    /// Trimmed bracket content, or `None` when it is blank.
    #[must_use]
    pub fn content_or_none(&self) -> Option<&str> {
        let trimmed = self.content.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Length of an `#id` or `.class` token.
fn token_end(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len())
}

/// Parse a key-value pair from the attributes string.
///
/// Supports: `key="value"`, `key='value'`, `key=value`
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let word_end = s.find(char::is_whitespace).unwrap_or(s.len());
    let eq_pos = s[..word_end].find('=')?;
    let key = &s[..eq_pos];

    if key.is_empty() {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    if let Some(stripped) = after_eq.strip_prefix('"') {
        let end_quote = stripped.find('"')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        let end_quote = stripped.find('\'')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else {
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        Some((key, &after_eq[..end], &after_eq[end..]))
    }
}
