//! Document index for a support-matrix tree
//!
//! The index maps forward-slash paths relative to the matrix root
//! (`visionfive2/debian/README.md`) to a way of reading that document. It is
//! built once at start-up and handed to the repositories, which never touch
//! the file system directly. Tests build it from in-memory documents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::MatrixConfig;
use crate::error::{self, Result};

/// Where the text of an indexed document comes from
#[derive(Debug, Clone)]
enum DocumentSource {
    /// Content held in memory
    Inline(Arc<str>),
    /// Read from disk on demand
    File(PathBuf),
}

/// Path-to-document mapping, ordered by path
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    documents: BTreeMap<String, DocumentSource>,
}

impl DocumentIndex {
    /// Index board documents and status documents under `root`.
    ///
    /// Only two shapes are indexed: `<board>/<board_document>` and
    /// `<board>/<system>/<file>.<extension>`. Contents are not read here.
    pub fn scan(root: &Path, config: &MatrixConfig) -> Result<Self> {
        if !root.exists() {
            return Err(error::fs::root_not_found(root));
        }
        if !root.is_dir() {
            return Err(error::fs::root_not_directory(root));
        }

        let board_pattern = format!("*/{}", config.board_document);
        let status_pattern = format!("*/*/*.{}", config.extension());
        let board_glob = Glob::new(&board_pattern)
            .map_err(|e| error::config::invalid(format!("board_document: {e}")))?;
        let status_glob = Glob::new(&status_pattern)
            .map_err(|e| error::config::invalid(format!("document_extension: {e}")))?;

        let mut documents = BTreeMap::new();
        for entry in WalkDir::new(root)
            .min_depth(2)
            .max_depth(3)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let key = to_forward_slashes(relative);
            let candidate = CandidatePath::from(key.as_str());
            if board_glob.matched(&candidate).is_some() || status_glob.matched(&candidate).is_some()
            {
                documents.insert(key, DocumentSource::File(entry.path().to_path_buf()));
            }
        }

        debug!(root = %root.display(), documents = documents.len(), "indexed support matrix");
        Ok(Self { documents })
    }

    /// Build an index from in-memory `(path, content)` pairs.
    pub fn from_documents<I, P, C>(documents: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<Arc<str>>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(path, content)| (path.into(), DocumentSource::Inline(content.into())))
                .collect(),
        }
    }

    /// All indexed paths, in lexicographic order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Read a document's text.
    ///
    /// `Ok(None)` means the path is not indexed; `Err` means it is indexed but
    /// could not be read.
    pub async fn read(&self, path: &str) -> Result<Option<String>> {
        match self.documents.get(path) {
            None => Ok(None),
            Some(DocumentSource::Inline(content)) => Ok(Some(content.to_string())),
            Some(DocumentSource::File(file)) => tokio::fs::read_to_string(file)
                .await
                .map(Some)
                .map_err(|e| error::fs::read_failed(file, e.to_string())),
        }
    }
}

/// Join path components with `/` regardless of platform
fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
