//! CLI argument definitions using clap.
//!
//! Without flags every source file under the source root is scanned. Paths
//! given on the command line replace the source root. `--diff` and `--staged`
//! restrict the scan to lines added in the corresponding git diff.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Files to scan (default: all source files under the source root)
    pub files: Vec<PathBuf>,

    /// Only scan lines added in the working tree diff
    #[arg(long, visible_alias = "diff-only")]
    pub diff: bool,

    /// Only scan lines added in the staged diff (implies --diff)
    #[arg(long)]
    pub staged: bool,

    /// Base ref; with --head, diff `<base>...<head>`
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Head ref; with --base, diff `<base>...<head>`
    #[arg(long, value_name = "REF")]
    pub head: Option<String>,

    /// Source code root directory (overrides config file)
    #[arg(long, env = "CHECK_I18N_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write a default config file to the current directory and exit
    #[arg(long)]
    pub init: bool,
}

impl Arguments {
    /// Whether only added lines are scanned.
    pub fn diff_mode(&self) -> bool {
        self.diff || self.staged
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path:line -> "text"` lines grouped by file
    #[default]
    Text,
    /// A single JSON document
    Json,
}
