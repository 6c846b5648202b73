//! Inline suppression comments.
//!
//! Supports:
//! - `// i18n-ignore-line` - ignore the line the comment is on
//! - `// i18n-ignore-next-line` - ignore the following line
//!
//! Directives are read from the original source, before comments are stripped.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

static IGNORE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)//\s*i18n-ignore-line").unwrap());

static IGNORE_NEXT_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)//\s*i18n-ignore-next-line").unwrap());

/// Parsed suppression directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    IgnoreLine,
    IgnoreNextLine,
}

impl Directive {
    /// Parse a directive from one source line. Returns None if there is none.
    pub fn parse(line: &str) -> Option<Self> {
        if IGNORE_NEXT_LINE_REGEX.is_match(line) {
            return Some(Self::IgnoreNextLine);
        }
        if IGNORE_LINE_REGEX.is_match(line) {
            return Some(Self::IgnoreLine);
        }
        None
    }
}

/// Tracks suppressed lines for a single file.
#[derive(Debug, Default)]
pub struct DisableContext {
    /// 1-based line numbers that must not be reported.
    disabled_lines: HashSet<usize>,
}

impl DisableContext {
    /// Build the context from the original (unstripped) source lines.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ctx = Self::default();
        for (idx, line) in lines.into_iter().enumerate() {
            let line_num = idx + 1;
            match Directive::parse(line) {
                Some(Directive::IgnoreLine) => {
                    ctx.disabled_lines.insert(line_num);
                }
                Some(Directive::IgnoreNextLine) => {
                    ctx.disabled_lines.insert(line_num + 1);
                }
                None => {}
            }
        }
        ctx
    }

    /// Check if a line should be ignored.
    pub fn should_ignore(&self, line: usize) -> bool {
        self.disabled_lines.contains(&line)
    }
}
