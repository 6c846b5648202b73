//! check-i18n - hardcoded user-visible text detector for React/TypeScript code
//!
//! check-i18n scans `.ts`, `.tsx`, `.js` and `.jsx` sources for strings that
//! reach users without going through a translation function: JSX text,
//! user-visible attributes, toast messages and template literals. It can scan
//! a whole source tree or only the lines added in a git diff.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, running, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Discovery, comment stripping and violation extraction
//! - `issues`: Violation and scan result types
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
