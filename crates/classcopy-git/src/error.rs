use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("repository at '{path}' has no working directory")]
    BareRepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("diff delta has no file path")]
    MissingDeltaPath,

    #[error("status entry has no valid UTF-8 path")]
    MissingStatusPath,
}
