use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Absolute form of a user-supplied file path.
///
/// Existing files are canonicalized so they share the prefix of the project
/// root; missing files are made absolute against the current directory.
pub(crate) fn absolute_file(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return Ok(canonical);
    }
    std::path::absolute(path).map_err(|source| CliError::FilePath {
        path: path.to_path_buf(),
        source,
    })
}
