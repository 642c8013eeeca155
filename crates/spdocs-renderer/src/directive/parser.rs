//! Directive syntax parsing.
//!
//! Recognizes `CommonMark` generic directive syntax: `:name`, `::name`, `:::name`

use super::DirectiveArgs;

/// Parsed directive from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedDirective {
    /// Inline directive: `:name[content]{attrs}`
    Inline { name: String, args: DirectiveArgs },
    /// Leaf directive: `::name[content]{attrs}` (recognized, never rendered)
    Leaf,
    /// Container opening: `:::name[content]{attrs}`
    ContainerStart { name: String, args: DirectiveArgs },
    /// Container closing: `:::`
    ContainerEnd,
}

/// Find the first inline or leaf directive in a line.
///
/// Returns the directive with its byte range, or `None` when the line holds
/// no directive. Colons that do not start a directive (`Note:`, `https://`,
/// `10:30`) are skipped.
pub(crate) fn parse_line(line: &str) -> Option<(ParsedDirective, usize, usize)> {
    let mut search_from = 0;

    while let Some(offset) = line[search_from..].find(':') {
        let start = search_from + offset;
        let colon_count = line[start..].chars().take_while(|&c| c == ':').count();
        let after_colons = start + colon_count;

        if colon_count <= 2
            && let Some((name, args, end)) = parse_directive_body(line, after_colons)
        {
            let directive = if colon_count == 1 {
                ParsedDirective::Inline { name, args }
            } else {
                ParsedDirective::Leaf
            };
            return Some((directive, start, end));
        }

        search_from = after_colons;
    }

    None
}

/// Parse `name[content]{attrs}` starting at `pos`.
///
/// Returns the name, arguments and the end byte offset. A directive must carry
/// brackets or braces so that ordinary `word:word` text is left alone.
fn parse_directive_body(line: &str, pos: usize) -> Option<(String, DirectiveArgs, usize)> {
    let rest = &line[pos..];
    let name_end = rest
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(rest.len());

    let name = &rest[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }

    let mut end = pos + name_end;
    let (content, content_consumed) = parse_brackets(&line[end..]);
    end += content_consumed;
    let (attrs_str, attrs_consumed) = parse_braces(&line[end..]);
    end += attrs_consumed;

    if content_consumed == 0 && attrs_consumed == 0 {
        return None;
    }

    Some((
        name.to_owned(),
        DirectiveArgs::parse(&content, &attrs_str),
        end,
    ))
}

/// Check if a name is a valid directive name.
///
/// Valid names contain only alphanumeric characters, hyphens, and underscores.
fn is_valid_directive_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Parse content from brackets: `[content]`
///
/// Returns (content, `bytes_consumed`).
fn parse_brackets(s: &str) -> (String, usize) {
    parse_delimited(s, '[', ']')
}

/// Parse attributes from braces: `{#id .class key="value"}`
///
/// Returns (`attrs_str` without braces, `bytes_consumed`).
fn parse_braces(s: &str) -> (String, usize) {
    parse_delimited(s, '{', '}')
}

/// Parse a balanced `open ... close` span at the start of `s`.
fn parse_delimited(s: &str, open: char, close: char) -> (String, usize) {
    if !s.starts_with(open) {
        return (String::new(), 0);
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (s[1..i].to_owned(), i + 1);
            }
        }
    }

    (String::new(), 0)
}

/// Parse a whole line as a container directive.
///
/// Container openings and closings take the entire line. Returns `None` if the
/// line is not a container directive.
pub(crate) fn parse_container_line(line: &str) -> Option<ParsedDirective> {
    let trimmed = line.trim();

    if !trimmed.starts_with(":::") {
        return None;
    }

    let colon_count = trimmed.chars().take_while(|&c| c == ':').count();
    let after_colons = trimmed[colon_count..].trim_start();

    if after_colons.is_empty() {
        return Some(ParsedDirective::ContainerEnd);
    }

    let name_end = after_colons
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(after_colons.len());

    let name = &after_colons[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }

    let after_name = after_colons[name_end..].trim_start();
    let (content, content_consumed) = parse_brackets(after_name);
    let (attrs_str, _) = parse_braces(after_name[content_consumed..].trim_start());

    Some(ParsedDirective::ContainerStart {
        name: name.to_owned(),
        args: DirectiveArgs::parse(&content, &attrs_str),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(line: &str) -> (String, DirectiveArgs, usize, usize) {
        match parse_line(line) {
            Some((ParsedDirective::Inline { name, args }, start, end)) => (name, args, start, end),
            other => panic!("expected inline directive, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_directive() {
        let (name, args, start, end) = inline("See :rr[PY001] for details.");
        assert_eq!(name, "rr");
        assert_eq!(args.content, "PY001");
        assert_eq!(start, 4);
        assert_eq!(end, 14);
    }

    #[test]
    fn test_inline_after_plain_colons() {
        let (name, args, start, _) = inline("Note: see https://example.com and :rr[PC110]");
        assert_eq!(name, "rr");
        assert_eq!(args.content, "PC110");
        assert_eq!(start, 34);
    }

    #[test]
    fn test_word_colon_word_is_not_a_directive() {
        assert!(parse_line("time is 10:30 today").is_none());
        assert!(parse_line("key:value pairs").is_none());
    }

    #[test]
    fn test_inline_with_attrs() {
        let (name, args, _, _) = inline(r#":abbr[PEP]{title="Python Enhancement Proposal"}"#);
        assert_eq!(name, "abbr");
        assert_eq!(args.get("title"), Some("Python Enhancement Proposal"));
    }

    #[test]
    fn test_empty_brackets_still_parse() {
        let (name, args, start, end) = inline(":rr[]");
        assert_eq!(name, "rr");
        assert_eq!(args.content, "");
        assert_eq!((start, end), (0, 5));
    }

    #[test]
    fn test_leaf_directive() {
        let (directive, start, end) = parse_line("::youtube[dQw4w9WgXcQ]").unwrap();
        assert_eq!(directive, ParsedDirective::Leaf);
        assert_eq!((start, end), (0, 22));
    }

    #[test]
    fn test_container_start() {
        assert_eq!(
            parse_container_line("::: tabs"),
            Some(ParsedDirective::ContainerStart {
                name: "tabs".to_owned(),
                args: DirectiveArgs::default(),
            })
        );
    }

    #[test]
    fn test_container_with_content_and_attrs() {
        let directive = parse_container_line(":::details [Click to expand] {open}").unwrap();
        match directive {
            ParsedDirective::ContainerStart { name, args } => {
                assert_eq!(name, "details");
                assert_eq!(args.content, "Click to expand");
                assert!(args.flag("open"));
            }
            other => panic!("expected container start, got {other:?}"),
        }
    }

    #[test]
    fn test_container_end() {
        assert_eq!(parse_container_line(":::"), Some(ParsedDirective::ContainerEnd));
        assert_eq!(
            parse_container_line("  ::::  "),
            Some(ParsedDirective::ContainerEnd)
        );
    }

    #[test]
    fn test_not_directive() {
        assert!(parse_line("regular text").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_container_line("not a directive").is_none());
        assert!(parse_container_line(":::foo@bar").is_none());
    }

    #[test]
    fn test_invalid_name() {
        assert!(parse_line(":foo@bar[content]").is_none());
        assert!(parse_line(":[content]").is_none());
    }

    #[test]
    fn test_parse_brackets() {
        assert_eq!(parse_brackets("[hello]"), ("hello".to_owned(), 7));
        assert_eq!(
            parse_brackets("[nested [brackets]]"),
            ("nested [brackets]".to_owned(), 19)
        );
        assert_eq!(parse_brackets("no brackets"), (String::new(), 0));
        assert_eq!(parse_brackets("[unclosed"), (String::new(), 0));
    }

    #[test]
    fn test_parse_braces() {
        assert_eq!(parse_braces("{#id} rest"), ("#id".to_owned(), 5));
        assert_eq!(parse_braces("{unclosed"), (String::new(), 0));
    }
}
