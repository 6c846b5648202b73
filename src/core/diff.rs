//! Added-line tracking from `git diff -U0` output.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    process::Command,
    sync::LazyLock,
};

use anyhow::{Result, anyhow};
use regex::Regex;

static HUNK_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@@ -\d+(?:,\d+)? \+(\d+)(?:,(\d+))? @@").unwrap());

/// Which diff to read.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Read the index (`--cached`) instead of the working tree.
    pub staged: bool,
    pub base: Option<String>,
    pub head: Option<String>,
    /// Limit the diff to these paths.
    pub files: Vec<PathBuf>,
}

impl DiffOptions {
    /// Arguments passed to `git`.
    ///
    /// `<base>...<head>` is only added when both refs are set and the diff is
    /// not staged.
    pub fn git_args(&self) -> Vec<String> {
        let mut args = vec!["diff".to_string(), "-U0".to_string()];
        if self.staged {
            args.push("--cached".to_string());
        } else if let (Some(base), Some(head)) = (&self.base, &self.head) {
            args.push(format!("{base}...{head}"));
        }
        if !self.files.is_empty() {
            args.push("--".to_string());
            args.extend(self.files.iter().map(|f| f.to_string_lossy().into_owned()));
        }
        args
    }
}

/// Added line numbers per file, in the order files appear in the diff.
#[derive(Debug, Default)]
pub struct ChangedLines {
    files: Vec<PathBuf>,
    lines: HashMap<PathBuf, HashSet<usize>>,
}

impl ChangedLines {
    fn add(&mut self, file: &Path, line: usize) {
        if !self.lines.contains_key(file) {
            self.files.push(file.to_path_buf());
        }
        self.lines.entry(file.to_path_buf()).or_default().insert(line);
    }

    /// Files with at least one added line.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn lines_for(&self, file: &Path) -> Option<&HashSet<usize>> {
        self.lines.get(file)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Parse unified diff text. Paths are resolved against `cwd`.
///
/// Only `+` lines inside a hunk of a non-deleted file are recorded.
pub fn parse_unified_diff(diff: &str, cwd: &Path) -> ChangedLines {
    let mut changed = ChangedLines::default();
    let mut current_file: Option<PathBuf> = None;
    let mut in_hunk = false;
    let mut new_line = 0usize;

    for line in diff.split('\n') {
        if let Some(raw) = line.strip_prefix("+++ ") {
            let raw_path = raw.split('\t').next().unwrap_or_default().trim();
            in_hunk = false;
            current_file = if raw_path == "/dev/null" {
                None
            } else {
                Some(cwd.join(strip_diff_prefix(raw_path)))
            };
            continue;
        }

        if let Some(caps) = HUNK_HEADER_REGEX.captures(line) {
            new_line = caps[1].parse().unwrap_or(0);
            in_hunk = true;
            continue;
        }

        let Some(file) = current_file.as_deref() else {
            continue;
        };
        if !in_hunk {
            continue;
        }

        if line.starts_with('+') {
            changed.add(file, new_line);
            new_line += 1;
        } else if line.starts_with(' ') {
            new_line += 1;
        }
    }

    changed
}

fn strip_diff_prefix(path: &str) -> &str {
    path.strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path)
}

/// Run `git diff` in `cwd` and collect the added lines.
///
/// Exit status 1 is not treated as a failure.
pub fn read_changed_lines(options: &DiffOptions, cwd: &Path) -> Result<ChangedLines> {
    let output = Command::new("git")
        .args(options.git_args())
        .current_dir(cwd)
        .output()
        .map_err(|e| anyhow!("Unable to read git diff ({e})."))?;

    if output.status.code().is_none_or(|code| code > 1) {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let details = match stderr.trim() {
            "" => "git diff failed",
            message => message,
        };
        return Err(anyhow!("Unable to read git diff ({details})."));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_unified_diff(&stdout, cwd))
}
