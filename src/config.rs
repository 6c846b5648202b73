use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18ncheckrc.json";

/// Extensions that are candidates for scanning. Matching is case-sensitive.
pub const FILE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Path fragments marking test and mock files. Matched case-insensitively
/// against the POSIX-normalized path.
pub const TEST_FILE_MARKERS: &[&str] = &[".spec.", ".test.", "__tests__", "__mocks__", ".mock."];

/// Attributes whose values are never rendered to users: styling, routing,
/// identifiers, event handlers and state-only ARIA attributes.
pub const NON_USER_VISIBLE_ATTRIBUTES: &[&str] = &[
    "className",
    "class",
    "style",
    "to",
    "href",
    "src",
    "id",
    "data-testid",
    "data-test-id",
    "data-cy",
    "data-id",
    "testid",
    "key",
    "ref",
    "onClick",
    "onChange",
    "onSubmit",
    "onBlur",
    "onFocus",
    "onKeyDown",
    "onKeyUp",
    "type",
    "value",
    "name",
    "role",
    "tabIndex",
    "aria-hidden",
    "aria-describedby",
    "aria-labelledby",
    "aria-expanded",
    "aria-selected",
    "aria-checked",
    "aria-disabled",
    "aria-required",
    "aria-invalid",
    "aria-busy",
    "aria-live",
    "aria-atomic",
    "aria-relevant",
    "aria-modal",
    "aria-controls",
    "aria-owns",
    "aria-haspopup",
    "aria-orientation",
    "aria-valuemin",
    "aria-valuemax",
    "aria-valuenow",
    "aria-sort",
    "aria-readonly",
    "aria-multiline",
    "aria-multiselectable",
    "aria-autocomplete",
    "aria-activedescendant",
    "aria-colcount",
    "aria-colindex",
    "aria-colspan",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowspan",
    "aria-posinset",
    "aria-setsize",
    "aria-level",
    "aria-current",
    "aria-details",
    "aria-errormessage",
    "aria-flowto",
    "aria-keyshortcuts",
    "aria-rowindextext",
    "aria-colindextext",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_checked_attributes")]
    pub checked_attributes: Vec<String>,
    #[serde(default = "default_toast_methods")]
    pub toast_methods: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_checked_attributes() -> Vec<String> {
    [
        "placeholder",
        "title",
        "aria-label",
        "alt",
        "label",
        "aria-placeholder",
        "aria-valuetext",
        "aria-roledescription",
    ]
    .map(String::from)
    .to_vec()
}

fn default_toast_methods() -> Vec<String> {
    ["error", "success", "warning", "info"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            checked_attributes: default_checked_attributes(),
            toast_methods: default_toast_methods(),
            ignores: Vec::new(),
            ignore_texts: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, or if an
    /// attribute or toast method name could not be used inside a pattern.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for attr in &self.checked_attributes {
            if !is_identifier_like(attr) {
                anyhow::bail!("Invalid attribute name in 'checkedAttributes': \"{}\"", attr);
            }
        }

        for method in &self.toast_methods {
            if !is_identifier_like(method) {
                anyhow::bail!("Invalid method name in 'toastMethods': \"{}\"", method);
            }
        }

        Ok(())
    }
}

fn is_identifier_like(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
