use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Arguments;
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, default_config_json, load_config},
    core::{
        Extractor,
        diff::{DiffOptions, read_changed_lines},
        discover::Discoverer,
        scan_files,
    },
    issues::ScanResult,
};

/// What a run produced, before it is reported.
#[derive(Debug)]
pub enum RunOutcome {
    /// `--init` wrote a config file.
    Initialized(PathBuf),
    /// Nothing to scan. `diff` tells which message applies.
    NoTargets { diff: bool },
    Scanned(ScanResult),
}

pub fn run(args: &Arguments) -> Result<RunOutcome> {
    let cwd = env::current_dir().context("Failed to resolve the working directory")?;
    run_in(args, &cwd)
}

/// Run with `cwd` as the working directory.
pub fn run_in(args: &Arguments, cwd: &Path) -> Result<RunOutcome> {
    if args.init {
        return init(cwd).map(RunOutcome::Initialized);
    }

    let ConfigLoadResult { mut config, path } = load_config(cwd)?;
    if args.verbose {
        match &path {
            Some(path) => eprintln!("{} Using config {}", "info:".bold().cyan(), path.display()),
            None => eprintln!(
                "{} No {} found, using defaults",
                "info:".bold().cyan(),
                CONFIG_FILE_NAME
            ),
        }
    }
    if let Some(root) = &args.source_root {
        config.source_root = root.to_string_lossy().into_owned();
    }

    let source_root = cwd.join(&config.source_root);
    if args.files.is_empty() && !source_root.exists() {
        return Ok(RunOutcome::NoTargets { diff: false });
    }

    let discoverer = Discoverer::new(&config, cwd, args.verbose)?;
    let extractor = Extractor::new(&config)?;

    if args.diff_mode() {
        let options = DiffOptions {
            staged: args.staged,
            base: args.base.clone(),
            head: args.head.clone(),
            files: args.files.clone(),
        };
        let changed = read_changed_lines(&options, cwd)?;
        if changed.is_empty() {
            return Ok(RunOutcome::NoTargets { diff: true });
        }

        let targets: Vec<PathBuf> = changed
            .files()
            .iter()
            .filter(|file| !args.files.is_empty() || file.starts_with(&source_root))
            .filter(|file| file.exists() && discoverer.should_analyze(file))
            .cloned()
            .collect();
        if targets.is_empty() {
            return Ok(RunOutcome::NoTargets { diff: true });
        }

        let result = scan_files(&targets, &extractor, Some(&changed), cwd, args.verbose);
        return Ok(RunOutcome::Scanned(result));
    }

    let targets = discoverer.discover(&args.files, Path::new(&config.source_root));
    if targets.is_empty() {
        return Ok(RunOutcome::NoTargets { diff: false });
    }

    let result = scan_files(&targets, &extractor, None, cwd, args.verbose);
    Ok(RunOutcome::Scanned(result))
}

fn init(cwd: &Path) -> Result<PathBuf> {
    let config_path = cwd.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
