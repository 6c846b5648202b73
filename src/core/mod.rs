//! Core scanning engine.
//!
//! ## Pipeline
//!
//! 1. **Discover**: turn scan targets into an ordered list of candidate files
//!    ([`discover`]), or take the changed files of a git diff ([`diff`]).
//! 2. **Extract**: strip comments and run the per-line detectors over each file
//!    ([`extract`]), in parallel.
//! 3. **Collect**: gather violations in input order into a [`ScanResult`].

pub mod allow;
pub mod context;
pub mod diff;
pub mod directives;
pub mod discover;
pub mod extract;
pub mod strip;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

pub use diff::ChangedLines;
pub use extract::{Extractor, LineViolation};

use crate::{
    issues::{ScanResult, Violation},
    utils::display_path,
};

/// Read and scan `files`. With `changed`, only the added lines of each file
/// are examined.
///
/// A file that cannot be read is reported on stderr, contributes nothing and
/// is not counted as scanned.
/// Display paths are made relative to `base`.
pub fn scan_files(
    files: &[PathBuf],
    extractor: &Extractor,
    changed: Option<&ChangedLines>,
    base: &Path,
    verbose: bool,
) -> ScanResult {
    let no_lines: HashSet<usize> = HashSet::new();
    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let violations = read_source(path).map(|source| {
                let line_filter = changed.map(|c| c.lines_for(path).unwrap_or(&no_lines));
                extractor.collect_violations(&source, line_filter)
            });
            (path, violations)
        })
        .collect();

    let mut scan = ScanResult::default();

    for (path, result) in results {
        let display = display_path(path, base);
        match result {
            Ok(found) => {
                scan.files_scanned += 1;
                if verbose && !found.is_empty() {
                    eprintln!(
                        "{} {}: {} violation(s)",
                        "info:".bold().cyan(),
                        display,
                        found.len()
                    );
                }
                scan.violations.extend(found.into_iter().map(|v| Violation {
                    file: display.clone(),
                    line: v.line,
                    text: v.text,
                }));
            }
            Err(e) => {
                eprintln!("{} {:#}", "warning:".bold().yellow(), e);
            }
        }
    }

    scan
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))
}
