use std::path::{Path, PathBuf};

use crate::CONFIG_FILE_NAME;
use crate::error::ProjectError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCopyProject {
    pub root: PathBuf,
    pub config_path: PathBuf,
}

/// Walks up from `start_dir` to the nearest directory holding `classcopy.toml`.
///
/// # Errors
///
/// Returns `ProjectError` if the start path cannot be canonicalized or if no
/// config file exists in it or any ancestor.
pub fn discover_project(start_dir: &Path) -> Result<ClassCopyProject, ProjectError> {
    let start_dir = canonical_start(start_dir)?;

    let mut current = start_dir.as_path();
    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Ok(ClassCopyProject {
                root: current.to_path_buf(),
                config_path,
            });
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(ProjectError::NotFound { start_dir }),
        }
    }
}

/// Canonical form of the start path; a file resolves to its parent directory.
pub(crate) fn canonical_start(start: &Path) -> Result<PathBuf, ProjectError> {
    let canonical = start
        .canonicalize()
        .map_err(|source| ProjectError::StartPath {
            path: start.to_path_buf(),
            source,
        })?;

    if canonical.is_file() {
        Ok(canonical
            .parent()
            .map_or_else(|| canonical.clone(), Path::to_path_buf))
    } else {
        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_config_in_start_dir() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(CONFIG_FILE_NAME), "")?;

        let project = discover_project(dir.path())?;

        assert_eq!(project.root, dir.path().canonicalize()?);
        assert_eq!(project.config_path, project.root.join(CONFIG_FILE_NAME));
        Ok(())
    }

    #[test]
    fn finds_config_in_ancestor() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(CONFIG_FILE_NAME), "")?;
        let nested = dir.path().join("src/main/java/com/acme");
        fs::create_dir_all(&nested)?;

        let project = discover_project(&nested)?;

        assert_eq!(project.root, dir.path().canonicalize()?);
        Ok(())
    }

    #[test]
    fn nearest_config_wins() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(CONFIG_FILE_NAME), "")?;
        let module = dir.path().join("module");
        fs::create_dir_all(module.join("src"))?;
        fs::write(module.join(CONFIG_FILE_NAME), "")?;

        let project = discover_project(&module.join("src"))?;

        assert_eq!(project.root, module.canonicalize()?);
        Ok(())
    }

    #[test]
    fn start_file_resolves_to_parent() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(CONFIG_FILE_NAME), "")?;
        fs::write(dir.path().join("Foo.java"), "class Foo {}")?;

        let project = discover_project(&dir.path().join("Foo.java"))?;

        assert_eq!(project.root, dir.path().canonicalize()?);
        Ok(())
    }

    #[test]
    fn missing_start_path_is_an_error() {
        let result = discover_project(Path::new("/nonexistent/start/path"));

        assert!(matches!(result, Err(ProjectError::StartPath { .. })));
    }
}
