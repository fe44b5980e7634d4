use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Untracked,
    Modified,
    Deleted,
    Renamed,
    Copied,
}

impl FileStatus {
    /// Whether the file did not exist before this change.
    #[must_use]
    pub fn is_new(self) -> bool {
        matches!(self, Self::Added | Self::Untracked | Self::Copied)
    }
}

/// A changed file, with `path` relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub status: FileStatus,
    pub old_path: Option<PathBuf>,
}

impl FileChange {
    #[must_use]
    pub fn new(path: PathBuf, status: FileStatus) -> Self {
        Self {
            path,
            status,
            old_path: None,
        }
    }

    #[must_use]
    pub fn with_old_path(mut self, old_path: PathBuf) -> Self {
        self.old_path = Some(old_path);
        self
    }
}
