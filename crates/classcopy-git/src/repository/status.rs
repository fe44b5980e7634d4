use std::path::PathBuf;

use git2::{Status, StatusEntry};

use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Lists uncommitted changes: staged, unstaged and untracked files.
    ///
    /// # Errors
    ///
    /// Returns an error if the git status operation fails.
    pub fn working_tree_changes(&self) -> Result<Vec<FileChange>> {
        let mut options = git2::StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .renames_head_to_index(true)
            .renames_index_to_workdir(true);

        let statuses = self.inner.statuses(Some(&mut options))?;

        let mut changes = Vec::new();
        for entry in statuses.iter() {
            let Some(status) = classify(entry.status()) else {
                continue;
            };

            let change = if status == FileStatus::Renamed {
                renamed_change(&entry)?
            } else {
                let path = entry.path().ok_or(GitError::MissingStatusPath)?;
                FileChange::new(PathBuf::from(path), status)
            };

            changes.push(change);
        }

        Ok(changes)
    }
}

fn classify(flags: Status) -> Option<FileStatus> {
    if flags.is_ignored() {
        return None;
    }
    if flags.intersects(Status::INDEX_DELETED | Status::WT_DELETED) {
        return Some(FileStatus::Deleted);
    }
    if flags.intersects(Status::INDEX_RENAMED | Status::WT_RENAMED) {
        return Some(FileStatus::Renamed);
    }
    if flags.contains(Status::INDEX_NEW) {
        return Some(FileStatus::Added);
    }
    if flags.contains(Status::WT_NEW) {
        return Some(FileStatus::Untracked);
    }
    if flags.intersects(
        Status::INDEX_MODIFIED
            | Status::WT_MODIFIED
            | Status::INDEX_TYPECHANGE
            | Status::WT_TYPECHANGE
            | Status::CONFLICTED,
    ) {
        return Some(FileStatus::Modified);
    }
    None
}

fn renamed_change(entry: &StatusEntry<'_>) -> Result<FileChange> {
    let delta = entry
        .head_to_index()
        .or_else(|| entry.index_to_workdir())
        .ok_or(GitError::MissingStatusPath)?;

    let new_path = delta
        .new_file()
        .path()
        .map(PathBuf::from)
        .ok_or(GitError::MissingStatusPath)?;

    let mut change = FileChange::new(new_path, FileStatus::Renamed);
    if let Some(old_path) = delta.old_file().path() {
        change = change.with_old_path(old_path.to_path_buf());
    }
    Ok(change)
}
