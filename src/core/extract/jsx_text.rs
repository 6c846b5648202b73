//! JSX text nodes: `<div>Welcome</div>` and text on its own line between tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::context::{
    is_in_skip_context, is_type_annotation, looks_like_code, looks_like_code_line,
};

static JSX_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*([^<>{}\n]+?)\s*<").unwrap());

static TAG_END_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s*$").unwrap());

static CLOSING_TAG_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*</").unwrap());

/// Text between `>` and `<` on a single line, minus code-like matches.
pub fn inline_texts(line: &str) -> Vec<&str> {
    JSX_TEXT_REGEX
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let text = caps.get(1)?.as_str();
            let before = &line[..whole.start()];

            if is_in_skip_context(line, whole.start()) {
                return None;
            }

            let surrounding = format!("{}{}", before, &line[whole.end()..]);
            if is_type_annotation(&surrounding, before) || looks_like_code(text, before) {
                return None;
            }

            Some(text)
        })
        .collect()
}

/// Text that sits alone on a line between an opening tag on the previous line
/// and a closing tag on this or the next line:
///
/// ```text
/// <a href="/users">
///   View Users
/// </a>
/// ```
pub fn multiline_text<'a>(previous: &str, line: &'a str, next: &str) -> Option<&'a str> {
    let trimmed = line.trim();
    let is_text_line = !trimmed.is_empty()
        && !trimmed.starts_with('<')
        && !trimmed.starts_with('{')
        && !trimmed.starts_with("//")
        && !trimmed.starts_with("/*");

    if !is_text_line
        || !TAG_END_REGEX.is_match(previous)
        || !(CLOSING_TAG_START_REGEX.is_match(next) || line.contains("</"))
    {
        return None;
    }

    let start = line.len() - line.trim_start().len();
    if is_in_skip_context(line, start) || looks_like_code_line(trimmed, previous) {
        return None;
    }

    // `Save</button>` reports only the text before the tag.
    let text = match trimmed.find('<') {
        Some(end) => trimmed[..end].trim_end(),
        None => trimmed,
    };
    Some(text)
}
