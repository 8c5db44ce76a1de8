//! Repositories that turn indexed documents into records
//!
//! Every load is independent and read-only. Aggregate loads spawn one task
//! per document and wait for all of them; a document that is missing,
//! unreadable or malformed is logged and left out of the result.

mod board;
mod system;

pub use board::BoardRepository;
pub use system::{SystemEntry, SystemRepository};

use tokio::task::JoinHandle;
use tracing::warn;

use crate::document::DocumentIndex;

/// Await every handle and keep the outputs of those that completed, in spawn
/// order. A panicked task is logged under its label and skipped.
async fn join_in_order<T>(handles: Vec<(String, JoinHandle<T>)>) -> Vec<T> {
    let mut outputs = Vec::with_capacity(handles.len());
    for (label, handle) in handles {
        match handle.await {
            Ok(output) => outputs.push(output),
            Err(e) => warn!(document = %label, error = %e, "load task failed"),
        }
    }
    outputs
}

/// Read a document, logging and returning `None` when it is absent or
/// unreadable.
async fn read_document(index: &DocumentIndex, path: &str) -> Option<String> {
    match index.read(path).await {
        Ok(Some(content)) => Some(content),
        Ok(None) => {
            warn!(document = %path, "document not found");
            None
        }
        Err(e) => {
            warn!(document = %path, error = %e, "failed to read document");
            None
        }
    }
}
