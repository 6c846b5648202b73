//! Comment stripping that keeps line numbers stable.
//!
//! Block comments collapse to the newlines they spanned and line comments are
//! cut to the end of the line, so line `i` of the output is line `i` of the input.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

// `//` only starts a comment at line start or after whitespace, so `https://` survives.
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|\s)//.*$").unwrap());

static IMPORT_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(import|require)\b").unwrap());

static FUNCTION_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(export\s+)?(async\s+)?function\s*\w*\s*(<[^>]*>)?\s*\([^)]*\)\s*\{",
        r"|^(export\s+)?(const|let|var)\s+\w+\s*(?::[^=]*)?=\s*\([^)]*\)\s*=>",
    ))
    .unwrap()
});

/// Remove block and line comments, preserving the line count.
pub fn strip_comments(content: &str) -> String {
    let without_blocks = BLOCK_COMMENT_REGEX.replace_all(content, |caps: &Captures| {
        "\n".repeat(caps[0].matches('\n').count())
    });
    LINE_COMMENT_REGEX
        .replace_all(&without_blocks, "$1")
        .into_owned()
}

/// Lines that pull in modules carry no user-visible text.
pub fn is_import_line(line: &str) -> bool {
    IMPORT_LINE_REGEX.is_match(line)
}

/// Function and arrow-function headers, e.g. `const fn = (a: string) => {`.
pub fn is_function_header(line: &str) -> bool {
    FUNCTION_HEADER_REGEX.is_match(line.trim())
}
