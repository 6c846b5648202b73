//! Template literals rendered as text: `{`Hello ${name}`}` and `label = `Total``.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    config::NON_USER_VISIBLE_ATTRIBUTES,
    core::{
        allow::{AllowList, looks_like_date_format, looks_like_url},
        context::is_in_skip_context,
    },
};

static ATTRIBUTE_ASSIGNMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+(?:-\w+)*(?::\w+)?)\s*=\s*").unwrap());

static NON_USER_VISIBLE_ASSIGNMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<String> = NON_USER_VISIBLE_ATTRIBUTES
        .iter()
        .map(|name| regex::escape(name))
        .collect();
    Regex::new(&format!(r#"(?i)\b(?:{})\s*=\s*['"`{{]"#, names.join("|"))).unwrap()
});

static CLASS_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)className").unwrap());

// Class lists and the conditional expressions that usually build them.
static CSS_CLASS_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(btn|primary|secondary|danger|warning|info|success|lg|sm|md|xl|container|wrapper|flex|grid|row|col)\b",
        r"\b(m-|p-|d-|text-|bg-|border-|rounded|shadow|hover|active|disabled|shimmer|mx-|my-|px-|py-|ms-|me-|mt-|mb-|pt-|pb-|ps-|pe-)\d*",
        r"\b(fi\s+fi-|fa\s+fa-)",
        r"\$\{styles\.\w+\}",
        r#"\?\s*['"`]?\w+['"`]?\s*:"#,
        r#"\w+\s*===\s*['"`]?\w+['"`]?\s*\?"#,
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static NESTED_INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^`]*`[^`]*`[^}]*\}").unwrap());

static INTERPOLATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());

/// A template literal found on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateLiteral<'a> {
    /// Text between the backticks, interpolations included.
    pub body: &'a str,
    /// Byte offset of the opening backtick.
    pub start: usize,
    /// Byte offset just past the closing backtick.
    pub end: usize,
}

/// Find the outermost template literals on a line. A backtick right after
/// `${` opens a nested literal instead of closing the current one.
pub fn find_template_literals(line: &str) -> Vec<TemplateLiteral<'_>> {
    let bytes = line.as_bytes();
    let mut literals = Vec::new();
    let mut open: Option<usize> = None;
    let mut depth = 0usize;

    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'`' {
            continue;
        }
        match open {
            None => {
                open = Some(i);
                depth = 1;
            }
            Some(start) => {
                if i >= 2 && bytes[i - 1] == b'{' && bytes[i - 2] == b'$' {
                    depth += 1;
                } else {
                    depth -= 1;
                    if depth == 0 {
                        literals.push(TemplateLiteral {
                            body: &line[start + 1..i],
                            start,
                            end: i + 1,
                        });
                        open = None;
                    }
                }
            }
        }
    }

    literals
}

/// Template literals on `line` that render user-visible text. The full
/// literal body is returned so interpolations stay visible in the report.
pub fn violations<'a>(line: &'a str, allow: &AllowList) -> Vec<&'a str> {
    find_template_literals(line)
        .into_iter()
        .filter(|literal| is_reported(line, literal, allow))
        .map(|literal| literal.body)
        .collect()
}

fn is_reported(line: &str, literal: &TemplateLiteral<'_>, allow: &AllowList) -> bool {
    let before = &line[..literal.start];
    let after = &line[literal.end..];

    if !inside_jsx_expression(before)
        && !after.trim_start().starts_with('=')
        && !before.trim_end().ends_with('=')
    {
        return false;
    }

    if is_in_skip_context(line, literal.start) {
        return false;
    }

    if attribute_name(before).is_some_and(|name| {
        NON_USER_VISIBLE_ATTRIBUTES
            .iter()
            .any(|attr| attr.eq_ignore_ascii_case(name))
    }) {
        return false;
    }
    if NON_USER_VISIBLE_ASSIGNMENT_REGEX.is_match(before) {
        return false;
    }

    if CLASS_NAME_REGEX.is_match(before)
        && CSS_CLASS_REGEXES.iter().any(|r| r.is_match(literal.body))
    {
        return false;
    }

    let static_text = static_text(literal.body);
    if looks_like_url(&static_text)
        || looks_like_url(literal.body)
        || looks_like_date_format(&static_text)
        || looks_like_date_format(literal.body)
    {
        return false;
    }

    !static_text.is_empty() && !allow.is_allowed(&static_text)
}

/// Whether `before` ends inside an unclosed `{ ... }` expression.
fn inside_jsx_expression(before: &str) -> bool {
    let mut depth = 0i32;
    for ch in before.chars().rev() {
        match ch {
            '}' => depth += 1,
            '{' if depth == 0 => return true,
            '{' => depth -= 1,
            _ => {}
        }
    }
    false
}

/// Name of the last `name=` assignment in `before`, if any.
fn attribute_name(before: &str) -> Option<&str> {
    ATTRIBUTE_ASSIGNMENT_REGEX
        .captures_iter(before)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The literal text of a template body with interpolations removed.
fn static_text(body: &str) -> String {
    let without_nested = NESTED_INTERPOLATION_REGEX.replace_all(body, "");
    INTERPOLATION_REGEX
        .replace_all(&without_nested, "")
        .trim()
        .to_string()
}
