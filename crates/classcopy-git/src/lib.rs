mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{FileChange, FileStatus};

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not inside a git repository or if the status check fails.
pub fn working_tree_changes(path: &Path) -> Result<Vec<FileChange>> {
    Repository::open(path)?.working_tree_changes()
}
