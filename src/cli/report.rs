//! Report formatting and printing.
//!
//! Separate from the scanning code so the library can be used without
//! printing anything.

use std::io::{self, Write};

use super::{args::OutputFormat, run::RunOutcome};
use crate::{config::CONFIG_FILE_NAME, issues::ScanResult};

pub const NO_FILES_MESSAGE: &str = "No files to scan for i18n violations.";
pub const NO_CHANGED_LINES_MESSAGE: &str = "No changed lines to scan for i18n violations.";
pub const CLEAN_MESSAGE: &str = "No non-internationalized user-visible text found.";
pub const VIOLATIONS_HEADER: &str =
    "The following files contain non-internationalized user-visible text:";

/// Print the outcome of a run to stdout.
pub fn print(outcome: &RunOutcome, format: OutputFormat) {
    print_to(outcome, format, &mut io::stdout().lock());
}

/// Print the outcome of a run to a custom writer.
pub fn print_to<W: Write>(outcome: &RunOutcome, format: OutputFormat, writer: &mut W) {
    match (outcome, format) {
        (RunOutcome::Initialized(_), _) => {
            let _ = writeln!(writer, "Created {}", CONFIG_FILE_NAME);
        }
        (RunOutcome::NoTargets { .. }, OutputFormat::Json) => {
            write_json(&ScanResult::default(), writer);
        }
        (RunOutcome::NoTargets { diff }, OutputFormat::Text) => {
            let message = if *diff {
                NO_CHANGED_LINES_MESSAGE
            } else {
                NO_FILES_MESSAGE
            };
            let _ = writeln!(writer, "{}", message);
        }
        (RunOutcome::Scanned(result), OutputFormat::Json) => write_json(result, writer),
        (RunOutcome::Scanned(result), OutputFormat::Text) => write_text(result, writer),
    }
}

/// `path:line -> "text"`, one line per violation, a blank line after each file.
fn write_text<W: Write>(result: &ScanResult, writer: &mut W) {
    if result.is_clean() {
        let _ = writeln!(writer, "{}", CLEAN_MESSAGE);
        return;
    }

    let _ = writeln!(writer, "{}\n", VIOLATIONS_HEADER);
    for (file, violations) in result.by_file() {
        for violation in violations {
            let _ = writeln!(
                writer,
                "{}:{} -> {}",
                file,
                violation.line,
                quote(&violation.text)
            );
        }
        let _ = writeln!(writer);
    }
}

fn write_json<W: Write>(result: &ScanResult, writer: &mut W) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// The text as a JSON string literal.
fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("{:?}", text))
}
