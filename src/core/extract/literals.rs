//! Quoted string literals in user-visible attributes and toast calls.

use anyhow::{Context, Result};
use regex::{Captures, Regex};

/// One quoted value of any quote style: `"..."`, `'...'` or `` `...` ``.
/// Capture groups 2, 3 and 4 hold the value for the matching quote.
fn quoted_value_pattern(lazy: bool) -> String {
    let repeat = if lazy { "*?" } else { "*" };
    [
        format!(r#""((?:\\.|[^"\\]){repeat})""#),
        format!(r#"'((?:\\.|[^'\\]){repeat})'"#),
        format!(r#"`((?:\\.|[^`\\]){repeat})`"#),
    ]
    .join("|")
}

fn alternation(names: &[String]) -> String {
    names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

/// Build `attr="value"` matcher for the given attribute names.
/// Returns None when there is nothing to match.
pub fn attribute_regex(attributes: &[String]) -> Result<Option<Regex>> {
    if attributes.is_empty() {
        return Ok(None);
    }
    let pattern = format!(
        r"(?i)\b({})\s*=\s*(?:{})",
        alternation(attributes),
        quoted_value_pattern(false)
    );
    Regex::new(&pattern)
        .map(Some)
        .with_context(|| format!("Invalid attribute pattern: {pattern}"))
}

/// Build `toast.method("message")` matcher for the given toast methods.
/// Returns None when there is nothing to match.
pub fn toast_regex(methods: &[String]) -> Result<Option<Regex>> {
    if methods.is_empty() {
        return Ok(None);
    }
    let pattern = format!(
        r"(?i)toast\.({})\s*\(\s*(?:{})",
        alternation(methods),
        quoted_value_pattern(true)
    );
    Regex::new(&pattern)
        .map(Some)
        .with_context(|| format!("Invalid toast pattern: {pattern}"))
}

/// The quoted value of a match from [`attribute_regex`] or [`toast_regex`],
/// with the byte offset where the whole match starts.
pub fn quoted_value<'a>(caps: &Captures<'a>) -> Option<(usize, &'a str)> {
    let start = caps.get(0)?.start();
    let value = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4))?;
    Some((start, value.as_str()))
}
