//! Scan results.
//!
//! A [`Violation`] is one hardcoded string at a file and line. [`ScanResult`]
//! holds every violation of a run in report order: files in input order, then
//! source order within each file.

use serde::Serialize;

/// A hardcoded user-visible string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Display path with forward slashes, relative to the working directory
    /// when the file lives underneath it.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

/// Outcome of scanning a set of candidate files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub files_scanned: usize,
    pub violations: Vec<Violation>,
}

impl ScanResult {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations grouped by file, keeping report order.
    pub fn by_file(&self) -> Vec<(&str, &[Violation])> {
        self.violations
            .chunk_by(|a, b| a.file == b.file)
            .map(|group| (group[0].file.as_str(), group))
            .collect()
    }
}
