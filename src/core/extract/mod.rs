//! Per-file extraction of hardcoded user-visible strings.
//!
//! Every line of the comment-stripped source is run through five detectors in
//! a fixed order: inline JSX text, multi-line JSX text, template literals,
//! user-visible attributes and toast messages.

mod jsx_text;
mod literals;
mod template;


use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;

use crate::{
    config::Config,
    core::{
        allow::AllowList,
        context::is_in_skip_context,
        directives::DisableContext,
        strip::{is_function_header, is_import_line, strip_comments},
    },
};

/// A hardcoded string found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineViolation {
    /// 1-based line number in the original source.
    pub line: usize,
    pub text: String,
}

/// Detectors compiled from a [`Config`], shared by all files in a run.
#[derive(Debug)]
pub struct Extractor {
    attribute_regex: Option<Regex>,
    toast_regex: Option<Regex>,
    allow: AllowList,
}

impl Extractor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            attribute_regex: literals::attribute_regex(&config.checked_attributes)?,
            toast_regex: literals::toast_regex(&config.toast_methods)?,
            allow: AllowList::new(&config.ignore_texts),
        })
    }

    /// Collect violations in `source`, in line order then detector order.
    ///
    /// When `line_filter` is given only those 1-based lines are examined.
    pub fn collect_violations(
        &self,
        source: &str,
        line_filter: Option<&HashSet<usize>>,
    ) -> Vec<LineViolation> {
        let disable_context = DisableContext::from_lines(source.split('\n'));
        let stripped = strip_comments(source);
        let lines: Vec<&str> = stripped.split('\n').collect();

        let mut violations = Vec::new();
        for (idx, &line) in lines.iter().enumerate() {
            let line_num = idx + 1;

            if line_filter.is_some_and(|filter| !filter.contains(&line_num))
                || disable_context.should_ignore(line_num)
                || is_import_line(line)
                || is_function_header(line)
            {
                continue;
            }

            let mut report = |text: &str| {
                violations.push(LineViolation {
                    line: line_num,
                    text: text.to_string(),
                })
            };

            for text in jsx_text::inline_texts(line) {
                if !self.allow.is_allowed(text) {
                    report(text);
                }
            }

            if idx > 0 && idx + 1 < lines.len() {
                if let Some(text) = jsx_text::multiline_text(lines[idx - 1], line, lines[idx + 1])
                    && !self.allow.is_allowed(text)
                {
                    report(text);
                }
            }

            for text in template::violations(line, &self.allow) {
                report(text);
            }

            if let Some(regex) = &self.attribute_regex {
                for caps in regex.captures_iter(line) {
                    if let Some((start, value)) = literals::quoted_value(&caps)
                        && !is_in_skip_context(line, start)
                        && !self.allow.is_allowed(value)
                    {
                        report(value);
                    }
                }
            }

            if let Some(regex) = &self.toast_regex {
                for caps in regex.captures_iter(line) {
                    if let Some((_, value)) = literals::quoted_value(&caps)
                        && !self.allow.is_allowed(value)
                    {
                        report(value);
                    }
                }
            }
        }

        violations
    }
}
