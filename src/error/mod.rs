//! Error types and handling for verforte
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only operator-facing failures live here. Missing or malformed documents
//! never become errors: the repositories log them and drop the record.
//!
//! - [`config`]: Configuration errors
//! - [`fs`]: File system and matrix root errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for verforte operations
#[derive(Error, Diagnostic, Debug)]
pub enum MatrixError {
    // Matrix root errors
    #[error("Support matrix root not found: {path}")]
    #[diagnostic(
        code(verforte::root::not_found),
        help("Pass --root, set VERFORTE_ROOT, or set `root` in verforte.yaml")
    )]
    RootNotFound { path: String },

    #[error("Support matrix root is not a directory: {path}")]
    #[diagnostic(code(verforte::root::not_a_directory))]
    RootNotDirectory { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(verforte::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(verforte::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(verforte::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(verforte::config::invalid))]
    ConfigInvalid { message: String },

    // Presentation errors
    #[error("Unknown sort column: {column}")]
    #[diagnostic(
        code(verforte::sort::unknown_column),
        help("Valid columns: {valid}")
    )]
    UnknownSortColumn { column: String, valid: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(verforte::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(verforte::output::serialize_failed))]
    SerializeFailed { reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(verforte::fs::read_failed))]
    FileReadFailed { path: String, reason: String },
}

impl From<serde_yaml::Error> for MatrixError {
    fn from(err: serde_yaml::Error) -> Self {
        MatrixError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MatrixError {
    fn from(err: serde_json::Error) -> Self {
        MatrixError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MatrixError>;
