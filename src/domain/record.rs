//! Board and system records

use serde::Serialize;

use super::StatusCode;

/// Metadata for one board, read from `<board>/README.md`.
///
/// Missing fields already hold the configured placeholder, so every field is
/// always displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    pub product: String,
    pub cpu: String,
    pub cpu_core: String,
    /// Board directory name, the board's identity.
    pub dir: String,
}

/// Support status of one system variant on one board.
///
/// Identity is `(board_dir, system_dir, file_name)`. `board_dir` may name a
/// board that is not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRecord {
    pub system: String,
    pub system_version: Option<String>,
    pub system_variant: Option<String>,
    pub status: StatusCode,
    pub last_update: Option<String>,
    pub system_dir: String,
    pub board_dir: String,
    pub file_name: String,
}
