//! Shared setup for the record commands
//!
//! Resolves configuration and the matrix root, scans the document index once
//! and hands out repositories over it.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{self, MatrixConfig};
use crate::document::DocumentIndex;
use crate::domain::{BoardRecord, SystemRecord};
use crate::error::Result;
use crate::repository::{BoardRepository, SystemRepository};

/// Global CLI options every record command needs
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Loaded configuration plus repositories over one scanned index
#[derive(Debug)]
pub struct MatrixContext {
    pub root: PathBuf,
    boards: BoardRepository,
    systems: SystemRepository,
}

impl MatrixContext {
    pub fn open(options: &GlobalOptions) -> Result<Self> {
        let config = config::load(options.config.as_deref(), options.root.as_deref())?;
        let root = config.resolve_root(options.root.clone());
        debug!(root = %root.display(), "resolved matrix root");

        let index = DocumentIndex::scan(&root, &config)?;
        if index.is_empty() {
            warn!(root = %root.display(), "no documents found under matrix root");
        } else {
            info!(documents = index.len(), "indexed matrix documents");
        }

        Ok(Self::from_parts(root, index, config))
    }

    pub fn from_parts(root: PathBuf, index: DocumentIndex, config: MatrixConfig) -> Self {
        let boards = BoardRepository::new(Arc::new(index), Arc::new(config));
        let systems = SystemRepository::new(boards.clone());
        Self {
            root,
            boards,
            systems,
        }
    }

    pub async fn boards(&self) -> Vec<BoardRecord> {
        self.boards.load_all_boards().await
    }

    /// Boards and status records, loaded concurrently
    pub async fn records(&self) -> (Vec<BoardRecord>, Vec<SystemRecord>) {
        tokio::join!(
            self.boards.load_all_boards(),
            self.systems.load_all_systems()
        )
    }
}
