//! File system errors

use std::path::Path;

use super::MatrixError;

/// Creates a root not found error
pub fn root_not_found(path: &Path) -> MatrixError {
    MatrixError::RootNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a root-is-not-a-directory error
pub fn root_not_directory(path: &Path) -> MatrixError {
    MatrixError::RootNotDirectory {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> MatrixError {
    MatrixError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
