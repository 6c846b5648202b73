//! Common utility functions shared across the codebase.

use std::path::{MAIN_SEPARATOR, Path};

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use check_i18n::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(contains_alphabetic("Привет"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("→"));
/// assert!(!contains_alphabetic("..."));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Render a path with forward slashes regardless of platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use check_i18n::utils::to_posix_path;
///
/// assert_eq!(to_posix_path(Path::new("src/component.tsx")), "src/component.tsx");
/// ```
pub fn to_posix_path(path: &Path) -> String {
    posix_separators(&path.to_string_lossy())
}

/// Replace the platform separator with `/`.
pub fn posix_separators(path: &str) -> String {
    path.replace(MAIN_SEPARATOR, "/")
}

/// Path shown to users: relative to `base` when it lives underneath, otherwise as given.
pub fn display_path(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    to_posix_path(relative)
}
