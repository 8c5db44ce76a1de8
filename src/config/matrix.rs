//! Matrix configuration (verforte.yaml) data structures

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{self, Result};

pub const DEFAULT_ROOT: &str = "support-matrix";
pub const DEFAULT_BOARD_DOCUMENT: &str = "README.md";
pub const DEFAULT_DOCUMENT_EXTENSION: &str = "md";
pub const DEFAULT_PLACEHOLDER: &str = "Not specified";
pub const DEFAULT_RESERVED_DIRS: &[&str] = &[".github", "assets"];
pub const DEFAULT_LOCALE_SUFFIXES: &[&str] = &["zh"];

/// Matrix configuration from verforte.yaml
///
/// Every key is optional and falls back to the built-in default.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixConfig {
    /// Support matrix root directory
    pub root: Option<PathBuf>,

    /// File name of the per-board document
    pub board_document: String,

    /// Extension of status documents, without the dot
    pub document_extension: String,

    /// Extra top-level directories that never hold board data.
    /// `.github` and `assets` are always reserved.
    pub reserved_dirs: Vec<String>,

    /// Locale markers of translated documents (`README_zh.md` -> `zh`)
    pub locale_suffixes: Vec<String>,

    /// Text shown for a board field the README does not specify
    pub placeholder: String,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            root: None,
            board_document: DEFAULT_BOARD_DOCUMENT.to_string(),
            document_extension: DEFAULT_DOCUMENT_EXTENSION.to_string(),
            reserved_dirs: DEFAULT_RESERVED_DIRS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            locale_suffixes: DEFAULT_LOCALE_SUFFIXES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl MatrixConfig {
    /// Parse matrix configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.board_document.trim().is_empty() {
            return Err(error::config::invalid("board_document must not be empty"));
        }
        if self.board_document.contains('/') {
            return Err(error::config::invalid(format!(
                "board_document must be a file name, got '{}'",
                self.board_document
            )));
        }
        let extension = self.document_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(error::config::invalid(
                "document_extension must not be empty",
            ));
        }
        if self.locale_suffixes.iter().any(String::is_empty) {
            return Err(error::config::invalid(
                "locale_suffixes must not contain empty entries",
            ));
        }
        Ok(())
    }

    /// Document extension without a leading dot
    pub fn extension(&self) -> &str {
        self.document_extension.trim_start_matches('.')
    }

    /// Root directory, with the CLI value taking precedence
    pub fn resolve_root(&self, cli_root: Option<PathBuf>) -> PathBuf {
        cli_root
            .or_else(|| self.root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    /// Whether `dir` is a reserved name: a built-in one or a configured one
    pub fn is_reserved(&self, dir: &str) -> bool {
        DEFAULT_RESERVED_DIRS.contains(&dir) || self.reserved_dirs.iter().any(|r| r == dir)
    }

    /// Whether a file stem is a translated variant, like `README_zh`
    pub fn is_locale_variant(&self, file_name: &str) -> bool {
        self.locale_suffixes.iter().any(|locale| {
            file_name
                .strip_suffix(locale.as_str())
                .and_then(|rest| rest.strip_suffix('_'))
                .is_some_and(|stem| !stem.is_empty())
        })
    }
}
