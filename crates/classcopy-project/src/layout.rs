use std::path::{Component, Path, PathBuf};

use classcopy_core::RootMatching;

use crate::config::{ProjectConfig, parse_config};
use crate::error::ProjectError;
use crate::project::discover_project;

/// Command-line values that take precedence over `classcopy.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_roots: Vec<PathBuf>,
    pub output_root: Option<PathBuf>,
    pub root_matching: Option<RootMatching>,
}

impl ConfigOverrides {
    /// Both layouts are given, so no config file is needed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.source_roots.is_empty() && self.output_root.is_some()
    }

    fn apply(&self, mut config: ProjectConfig) -> ProjectConfig {
        if !self.source_roots.is_empty() {
            config = config.with_source_roots(self.source_roots.clone());
        }
        if let Some(output_root) = &self.output_root {
            config = config.with_output_root(output_root.clone());
        }
        if let Some(root_matching) = self.root_matching {
            config = config.with_root_matching(root_matching);
        }
        config
    }
}

/// Source and build-output layouts resolved to absolute paths.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    source_roots: Vec<PathBuf>,
    output_root: PathBuf,
    config: ProjectConfig,
}

impl ProjectLayout {
    #[must_use]
    pub fn new(root: PathBuf, config: ProjectConfig) -> Self {
        let source_roots = config
            .source_roots()
            .iter()
            .map(|r| absolutize(&root, r))
            .collect();
        let output_root = absolutize(&root, config.output_root());

        Self {
            root,
            source_roots,
            output_root,
            config,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn source_roots(&self) -> &[PathBuf] {
        &self.source_roots
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}

fn absolutize(root: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Discovers the project from `start` and resolves its layout.
///
/// Without a `classcopy.toml`, complete overrides make the start directory
/// the project root.
///
/// # Errors
///
/// Returns an error if the start path is inaccessible, if no config is found
/// and the overrides are incomplete, or if the config is invalid.
pub fn load_layout(
    start: &Path,
    overrides: &ConfigOverrides,
) -> Result<ProjectLayout, ProjectError> {
    let (root, config) = match discover_project(start) {
        Ok(project) => (project.root, parse_config(&project.config_path)?),
        Err(ProjectError::NotFound { start_dir }) if overrides.is_complete() => {
            (start_dir, ProjectConfig::default())
        }
        Err(e) => return Err(e),
    };

    Ok(ProjectLayout::new(root, overrides.apply(config)))
}
