use std::path::Path;

use classcopy_core::{ChangeKind, ChangeRecord};
use classcopy_git::{FileChange, FileStatus, Repository};
use tracing::debug;

use crate::Result;
use crate::traits::ChangeSource;

/// Which changes the git source reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum GitChangeScope {
    /// Staged, unstaged and untracked changes against HEAD.
    #[default]
    WorkingTree,
    /// Committed changes between the ref and HEAD, plus the working tree.
    Since(String),
}

pub struct Git2ChangeSource {
    scope: GitChangeScope,
}

impl Git2ChangeSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scope: GitChangeScope::WorkingTree,
        }
    }

    #[must_use]
    pub fn since(base: impl Into<String>) -> Self {
        Self {
            scope: GitChangeScope::Since(base.into()),
        }
    }
}

impl Default for Git2ChangeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSource for Git2ChangeSource {
    fn changes(&self, project_root: &Path) -> Result<Vec<ChangeRecord>> {
        let repo = Repository::open(project_root)?;
        let changes = match &self.scope {
            GitChangeScope::WorkingTree => repo.working_tree_changes()?,
            GitChangeScope::Since(base) => repo.changed_files_since(base)?,
        };

        Ok(changes
            .iter()
            .filter_map(|change| to_record(repo.root(), change))
            .collect())
    }
}

/// Deleted files have nothing to copy next to, so they produce no record.
fn to_record(repo_root: &Path, change: &FileChange) -> Option<ChangeRecord> {
    let kind = match change.status {
        FileStatus::Deleted => {
            debug!(path = %change.path.display(), "skipping deleted file");
            return None;
        }
        status if status.is_new() => ChangeKind::Added,
        FileStatus::Modified => ChangeKind::Modified,
        _ => ChangeKind::Other,
    };

    Some(ChangeRecord::new(repo_root.join(&change.path), kind))
}
