use std::path::{Path, PathBuf};

use classcopy_core::{ArtifactNaming, NamingConvention, RootMatching, SourceRoots};
use classcopy_project::ProjectLayout;
use globset::GlobSet;

/// Settings shared by every component call in one batch.
#[derive(Debug, Clone)]
pub struct BatchContext {
    source_roots: SourceRoots,
    output_root: PathBuf,
    root_matching: RootMatching,
    naming: NamingConvention,
    deduplicate: bool,
    project_root: Option<PathBuf>,
    ignored_files: GlobSet,
}

impl BatchContext {
    #[must_use]
    pub fn new(source_roots: SourceRoots, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_roots,
            output_root: output_root.into(),
            root_matching: RootMatching::default(),
            naming: NamingConvention::default(),
            deduplicate: false,
            project_root: None,
            ignored_files: GlobSet::empty(),
        }
    }

    #[must_use]
    pub fn from_layout(layout: &ProjectLayout) -> Self {
        let config = layout.config();
        Self::new(
            SourceRoots::from_paths(layout.source_roots()),
            layout.output_root(),
        )
        .with_root_matching(config.root_matching())
        .with_naming(config.naming().clone())
        .with_deduplicate(config.deduplicate())
        .with_ignored_files(layout.root(), config.ignored_files().clone())
    }

    #[must_use]
    pub fn with_root_matching(mut self, root_matching: RootMatching) -> Self {
        self.root_matching = root_matching;
        self
    }

    #[must_use]
    pub fn with_naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Patterns are matched against paths relative to `project_root`.
    #[must_use]
    pub fn with_ignored_files(mut self, project_root: &Path, ignored_files: GlobSet) -> Self {
        self.project_root = Some(project_root.to_path_buf());
        self.ignored_files = ignored_files;
        self
    }

    #[must_use]
    pub fn source_roots(&self) -> &SourceRoots {
        &self.source_roots
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[must_use]
    pub fn root_matching(&self) -> RootMatching {
        self.root_matching
    }

    #[must_use]
    pub fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    #[must_use]
    pub fn deduplicate(&self) -> bool {
        self.deduplicate
    }

    #[must_use]
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.naming.is_source_file(name))
    }

    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.ignored_files.is_empty() {
            return false;
        }
        let relative = self
            .project_root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        self.ignored_files.is_match(relative)
    }
}
