use std::path::{Path, PathBuf};

use classcopy_core::{
    DEFAULT_ARTIFACT_EXTENSION, DEFAULT_NESTED_SEPARATOR, DEFAULT_SOURCE_EXTENSION,
    NamingConvention, RootMatching,
};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config_file::{ConfigFile, NamingSection};
use crate::error::ProjectError;
use crate::{DEFAULT_OUTPUT_ROOT, DEFAULT_SOURCE_ROOT};

/// Settings read from `classcopy.toml`. Root paths are kept as written and
/// may be relative to the project root.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    source_roots: Vec<PathBuf>,
    output_root: PathBuf,
    ignored_files: GlobSet,
    root_matching: RootMatching,
    naming: NamingConvention,
    deduplicate: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_roots: vec![PathBuf::from(DEFAULT_SOURCE_ROOT)],
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            ignored_files: GlobSet::empty(),
            root_matching: RootMatching::default(),
            naming: NamingConvention::default(),
            deduplicate: false,
        }
    }
}

impl ProjectConfig {
    #[must_use]
    pub fn source_roots(&self) -> &[PathBuf] {
        &self.source_roots
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    #[must_use]
    pub fn ignored_files(&self) -> &GlobSet {
        &self.ignored_files
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
    pub fn with_source_roots(mut self, source_roots: Vec<PathBuf>) -> Self {
        self.source_roots = source_roots;
        self
    }

    #[must_use]
    pub fn with_output_root(mut self, output_root: PathBuf) -> Self {
        self.output_root = output_root;
        self
    }

    #[must_use]
    pub fn with_root_matching(mut self, root_matching: RootMatching) -> Self {
        self.root_matching = root_matching;
        self
    }

    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, ProjectError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ProjectError::GlobPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ProjectError::GlobPattern {
        pattern: patterns.join(", "),
        source,
    })
}

fn build_naming(section: &NamingSection, path: &Path) -> Result<NamingConvention, ProjectError> {
    let separator = DEFAULT_NESTED_SEPARATOR.to_string();
    NamingConvention::new(
        section
            .source_extension
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_EXTENSION),
        section
            .artifact_extension
            .as_deref()
            .unwrap_or(DEFAULT_ARTIFACT_EXTENSION),
        section.nested_separator.as_deref().unwrap_or(&separator),
    )
    .map_err(|source| ProjectError::Naming {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration text; `path` is only used for error reporting.
///
/// # Errors
///
/// Returns an error if the content is not valid TOML for the config schema, if
/// a glob pattern is invalid, or if the naming section is inconsistent.
pub fn parse_config_str(content: &str, path: &Path) -> Result<ProjectConfig, ProjectError> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| ProjectError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    let defaults = ProjectConfig::default();

    let source_roots = file
        .source_roots
        .map_or(defaults.source_roots, |roots| {
            roots.into_iter().map(PathBuf::from).collect()
        });

    Ok(ProjectConfig {
        source_roots,
        output_root: file
            .output_root
            .map_or(defaults.output_root, PathBuf::from),
        ignored_files: build_glob_set(&file.ignored_files)?,
        root_matching: file.root_matching.unwrap_or(defaults.root_matching),
        naming: build_naming(&file.naming, path)?,
        deduplicate: file.report.deduplicate.unwrap_or(defaults.deduplicate),
    })
}

/// # Errors
///
/// Returns an error if the file cannot be read or its content is invalid.
pub fn parse_config(path: &Path) -> Result<ProjectConfig, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_str(&content, path)
}
