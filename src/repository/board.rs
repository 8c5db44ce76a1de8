//! Board repository: one `BoardRecord` per board directory.

use std::sync::Arc;

use tracing::debug;

use super::{join_in_order, read_document};
use crate::config::MatrixConfig;
use crate::document::DocumentIndex;
use crate::domain::BoardRecord;
use crate::metadata::extract_inline;

/// Loads board metadata from `<board>/README.md` documents
#[derive(Debug, Clone)]
pub struct BoardRepository {
    index: Arc<DocumentIndex>,
    config: Arc<MatrixConfig>,
}

impl BoardRepository {
    pub fn new(index: Arc<DocumentIndex>, config: Arc<MatrixConfig>) -> Self {
        Self { index, config }
    }

    pub(super) fn index(&self) -> &Arc<DocumentIndex> {
        &self.index
    }

    pub(super) fn config(&self) -> &Arc<MatrixConfig> {
        &self.config
    }

    /// Board directories that have a board document, minus reserved names.
    ///
    /// Order follows the index (lexicographic for built-in indexes).
    pub fn list_board_directories(&self) -> Vec<String> {
        let boards: Vec<String> = self
            .index
            .paths()
            .filter_map(|path| {
                let (dir, file) = path.split_once('/')?;
                (file == self.config.board_document && !self.config.is_reserved(dir))
                    .then(|| dir.to_string())
            })
            .collect();
        debug!(boards = boards.len(), "listed board directories");
        boards
    }

    /// Load one board. `None` only when its document is missing or unreadable.
    pub async fn load_board(&self, dir: &str) -> Option<BoardRecord> {
        let path = format!("{dir}/{}", self.config.board_document);
        let content = read_document(&self.index, &path).await?;
        Some(self.parse_board(dir, &content))
    }

    /// Load every listed board concurrently, preserving listing order.
    pub async fn load_all_boards(&self) -> Vec<BoardRecord> {
        let handles = self
            .list_board_directories()
            .into_iter()
            .map(|dir| {
                let repo = self.clone();
                let label = dir.clone();
                let handle = tokio::spawn(async move { repo.load_board(&dir).await });
                (label, handle)
            })
            .collect();

        join_in_order(handles).await.into_iter().flatten().collect()
    }

    fn parse_board(&self, dir: &str, content: &str) -> BoardRecord {
        let field = |key: &str| {
            extract_inline(content, key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| self.config.placeholder.clone())
        };
        BoardRecord {
            product: field("product"),
            cpu: field("cpu"),
            cpu_core: field("cpu_core"),
            dir: dir.to_string(),
        }
    }
}
