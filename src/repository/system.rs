//! System repository: one `SystemRecord` per status document.

use tracing::{debug, warn};

use super::{BoardRepository, join_in_order, read_document};
use crate::domain::{StatusCode, SystemRecord};
use crate::metadata::extract_frontmatter;

/// A status document location below a board directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemEntry {
    pub system_dir: String,
    /// File name without its extension
    pub file_name: String,
}

/// Loads status records from `<board>/<system>/<file>.md` documents
///
/// Uses the board repository only to enumerate board directories.
#[derive(Debug, Clone)]
pub struct SystemRepository {
    boards: BoardRepository,
}

impl SystemRepository {
    pub fn new(boards: BoardRepository) -> Self {
        Self { boards }
    }

    /// Status documents two levels below `board_dir`, skipping translations.
    pub fn list_system_entries(&self, board_dir: &str) -> Vec<SystemEntry> {
        let config = self.boards.config();
        let extension = format!(".{}", config.extension());
        let prefix = format!("{board_dir}/");

        self.boards
            .index()
            .paths()
            .filter_map(|path| {
                let rest = path.strip_prefix(&prefix)?;
                let (system_dir, file) = rest.split_once('/')?;
                if system_dir.is_empty() || file.contains('/') {
                    return None;
                }
                let file_name = file.strip_suffix(&extension)?;
                if file_name.is_empty() || config.is_locale_variant(file_name) {
                    return None;
                }
                Some(SystemEntry {
                    system_dir: system_dir.to_string(),
                    file_name: file_name.to_string(),
                })
            })
            .collect()
    }

    /// Load one status document.
    ///
    /// `None` when the document is missing, unreadable, or has no front-matter
    /// block. A missing `status` field reads as `UNKNOWN`.
    pub async fn load_system(
        &self,
        board_dir: &str,
        system_dir: &str,
        file_name: &str,
    ) -> Option<SystemRecord> {
        let path = format!(
            "{board_dir}/{system_dir}/{file_name}.{}",
            self.boards.config().extension()
        );
        let content = read_document(self.boards.index(), &path).await?;

        let Some(frontmatter) = extract_frontmatter(&content) else {
            warn!(document = %path, "no front matter block");
            return None;
        };
        if frontmatter.is_empty() {
            debug!(document = %path, "empty front matter block");
        }
        if !frontmatter.contains_key("status") {
            debug!(document = %path, "status missing, treating as UNKNOWN");
        }

        let system = frontmatter.get("sys").map_or_else(
            || {
                debug!(document = %path, "sys missing, using directory name");
                system_dir.to_string()
            },
            str::to_string,
        );

        debug!(document = %path, fields = frontmatter.len(), "loaded status document");
        Some(SystemRecord {
            system,
            system_version: frontmatter.get("sys_ver").map(str::to_string),
            system_variant: frontmatter.get("sys_var").map(str::to_string),
            status: StatusCode::parse(frontmatter.get("status")),
            last_update: frontmatter.get("last_update").map(str::to_string),
            system_dir: system_dir.to_string(),
            board_dir: board_dir.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// Load every status document of one board concurrently.
    pub async fn load_all_systems_for_board(&self, board_dir: &str) -> Vec<SystemRecord> {
        let handles = self
            .list_system_entries(board_dir)
            .into_iter()
            .map(|entry| {
                let repo = self.clone();
                let board_dir = board_dir.to_string();
                let label = format!("{board_dir}/{}/{}", entry.system_dir, entry.file_name);
                let handle = tokio::spawn(async move {
                    repo.load_system(&board_dir, &entry.system_dir, &entry.file_name)
                        .await
                });
                (label, handle)
            })
            .collect();

        join_in_order(handles).await.into_iter().flatten().collect()
    }

    /// Load every status document of every board, flattened in board order.
    pub async fn load_all_systems(&self) -> Vec<SystemRecord> {
        let handles = self
            .boards
            .list_board_directories()
            .into_iter()
            .map(|board_dir| {
                let repo = self.clone();
                let label = board_dir.clone();
                let handle =
                    tokio::spawn(async move { repo.load_all_systems_for_board(&board_dir).await });
                (label, handle)
            })
            .collect();

        let systems: Vec<SystemRecord> = join_in_order(handles).await.into_iter().flatten().collect();
        debug!(systems = systems.len(), "loaded status documents");
        systems
    }
}
