use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] classcopy_git::GitError),

    #[error(transparent)]
    Project(#[from] classcopy_project::ProjectError),
}

pub type Result<T> = std::result::Result<T, OperationError>;
