use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] classcopy_operations::OperationError),

    #[error("cannot determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("invalid file path '{path}'")]
    FilePath {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render JSON output")]
    Json(#[from] serde_json::Error),

    #[error("{count} file(s) could not be found or copied")]
    CopyFailed { count: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;
