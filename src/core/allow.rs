//! Allow-list filters deciding whether a candidate string is exempt.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::utils::contains_alphabetic;

static INTERPOLATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{.*?\}").unwrap());

static URL_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?://|/|data:)").unwrap());

// Route and API shapes without a leading slash: `api/v1/users`, `orgstore/id=`, `id=123`.
static URL_PATTERN_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^[a-z0-9]+(/[a-z0-9\-_=]+)+(\?[^`]*)?$",
        r"(?i)^[a-z0-9]+/[a-z0-9\-_=]+",
        r"(?i)^[a-z0-9]+=[a-z0-9\-_=]+",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DATE_FORMAT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // YYYY-MM-DD, MM/DD/YYYY, HH:mm:ss
        r"(?i)^[YMDHmsS]+([/\-\s:.][YMDHmsS]+)+$",
        // YYYY-MM-DDTHH:mm:ss.SSS[Z]
        r"(?i)^[YMDHmsS]+([/\-\s:.T][YMDHmsS]+)*\[[^\]]+\][YMDHmsS]*$",
        // Intl.DateTimeFormat option values
        r"(?i)^(short|long|narrow|numeric|2-digit|full|medium)$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static REGEX_SYNTAX_ONLY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[.*+?^$\{\}()|\[\]\\/\-]+$").unwrap());

static REGEX_CHAR_CLASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[[^\]]*[a-z]-[a-z][^\]]*\]").unwrap());

static REGEX_QUANTIFIED_ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[dDwWsS][*+?\{]").unwrap());

// `t('common.title')`, `i18n.t("nav.home", { count })`
static TRANSLATION_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:[A-Za-z_$][\w$]*\.)*t\(\s*(?:'[^']*'|"[^"]*"|`[^`$]*`)\s*(?:,[^)]*)?\)$"#)
        .unwrap()
});

/// Whether `text` looks like a URL, a path, or a route/API fragment.
pub fn looks_like_url(text: &str) -> bool {
    let trimmed = text.trim();
    URL_PREFIX_REGEX.is_match(trimmed) || URL_PATTERN_REGEXES.iter().any(|r| r.is_match(trimmed))
}

/// Whether `text` looks like a date/time format string.
pub fn looks_like_date_format(text: &str) -> bool {
    let trimmed = text.trim();
    DATE_FORMAT_REGEXES.iter().any(|r| r.is_match(trimmed))
}

/// Whether `text` looks like a regular expression source.
pub fn looks_like_regex_pattern(text: &str) -> bool {
    let trimmed = text.trim();
    REGEX_SYNTAX_ONLY_REGEX.is_match(trimmed)
        || REGEX_CHAR_CLASS_REGEX.is_match(trimmed)
        || REGEX_QUANTIFIED_ESCAPE_REGEX.is_match(trimmed)
}

/// Whether `text` is a call to a translation helper with a literal key.
pub fn is_translation_call(text: &str) -> bool {
    TRANSLATION_CALL_REGEX.is_match(text.trim())
}

/// Remove `${...}` interpolations, leaving only the literal segments.
pub fn strip_interpolations(text: &str) -> String {
    INTERPOLATION_REGEX.replace_all(text, "").into_owned()
}

/// Decides whether candidate strings are exempt from reporting.
#[derive(Debug, Default)]
pub struct AllowList {
    ignore_texts: HashSet<String>,
}

impl AllowList {
    pub fn new(ignore_texts: &[String]) -> Self {
        Self {
            ignore_texts: ignore_texts.iter().map(|t| t.trim().to_string()).collect(),
        }
    }

    /// Returns true when `text` must not be reported.
    pub fn is_allowed(&self, text: &str) -> bool {
        let value = text.trim();
        if value.is_empty() {
            return true;
        }
        if self.ignore_texts.contains(value) {
            return true;
        }
        if value.contains("${") {
            return !contains_alphabetic(strip_interpolations(value).trim());
        }
        if looks_like_url(value)
            || looks_like_date_format(value)
            || looks_like_regex_pattern(value)
            || is_translation_call(value)
        {
            return true;
        }
        // A single word is enough to need translating.
        !contains_alphabetic(value)
    }
}
