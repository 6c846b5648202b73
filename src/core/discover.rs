//! Candidate file discovery.
//!
//! Candidates come from explicit targets or from walking the source root.
//! The same filter (extension, test files, `ignores` globs) applies to both.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::{
    config::{Config, FILE_EXTENSIONS, TEST_FILE_MARKERS},
    utils::{display_path, to_posix_path},
};

/// Extension and test-file check on a single path.
pub fn should_analyze_file(path: &Path, ignore_test_files: bool) -> bool {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FILE_EXTENSIONS.contains(&ext));
    if !has_extension {
        return false;
    }

    if ignore_test_files {
        let normalized = to_posix_path(path).to_lowercase();
        if TEST_FILE_MARKERS
            .iter()
            .any(|marker| normalized.contains(marker))
        {
            return false;
        }
    }

    true
}

/// Turns scan targets into an ordered, deduplicated list of files.
pub struct Discoverer {
    /// Working directory; relative targets and `ignores` globs resolve against it.
    base: PathBuf,
    ignores: Vec<Pattern>,
    ignore_test_files: bool,
    verbose: bool,
}

impl Discoverer {
    pub fn new(config: &Config, base: &Path, verbose: bool) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{p}\"")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            base: base.to_path_buf(),
            ignores,
            ignore_test_files: config.ignore_test_files,
            verbose,
        })
    }

    /// Resolve `path` against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base.join(path)
    }

    /// Whether a file passes every filter.
    pub fn should_analyze(&self, path: &Path) -> bool {
        let relative = display_path(path, &self.base);
        if !should_analyze_file(Path::new(&relative), self.ignore_test_files) {
            return false;
        }
        !self.ignores.iter().any(|p| p.matches(&relative))
    }

    /// Candidate files for `targets`, or for `source_root` when there are none.
    ///
    /// Missing explicit targets are dropped silently. A missing source root, or
    /// one that is not a directory, yields no files.
    pub fn discover(&self, targets: &[PathBuf], source_root: &Path) -> Vec<PathBuf> {
        let candidates = if targets.is_empty() {
            self.walk(&self.resolve(source_root))
        } else {
            targets
                .iter()
                .map(|target| self.resolve(target))
                .filter(|path| path.exists() && self.should_analyze(path))
                .collect()
        };

        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        if !root.is_dir() {
            if self.verbose {
                eprintln!(
                    "{} Source root is not a directory: {}",
                    "warning:".bold().yellow(),
                    root.display()
                );
            }
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if self.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            if entry.file_type().is_file() && self.should_analyze(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files
    }
}
