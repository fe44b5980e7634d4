use std::path::{Path, PathBuf};

use classcopy_core::{ChangeKind, ChangeRecord};

use crate::Result;
use crate::traits::ChangeSource;

/// An explicit list of changed files, all of the same kind.
///
/// Relative paths are taken relative to the project root.
pub struct StaticChangeSource {
    paths: Vec<PathBuf>,
    kind: ChangeKind,
}

impl StaticChangeSource {
    #[must_use]
    pub fn new(paths: Vec<PathBuf>, kind: ChangeKind) -> Self {
        Self { paths, kind }
    }

    #[must_use]
    pub fn modified(paths: Vec<PathBuf>) -> Self {
        Self::new(paths, ChangeKind::Modified)
    }

    #[must_use]
    pub fn added(paths: Vec<PathBuf>) -> Self {
        Self::new(paths, ChangeKind::Added)
    }
}

impl ChangeSource for StaticChangeSource {
    fn changes(&self, project_root: &Path) -> Result<Vec<ChangeRecord>> {
        Ok(self
            .paths
            .iter()
            .map(|path| ChangeRecord::new(project_root.join(path), self.kind))
            .collect())
    }
}
