use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Other,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Modified => write!(f, "modified"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A changed source file as reported by a change source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeRecord {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    #[must_use]
    pub fn added(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Added)
    }

    #[must_use]
    pub fn modified(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Modified)
    }

    #[must_use]
    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }
}

/// Identity of a source file independent of where its source root lives.
///
/// `package_dir` is relative to the matched source root and mirrors the
/// layout under the build-output root. `containing_dir` is the absolute
/// directory holding the source file, which is where artifacts are copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    pub package_dir: PathBuf,
    pub base_name: String,
    pub containing_dir: PathBuf,
}

/// A compiled artifact found under the build-output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactMatch {
    pub path: PathBuf,
}

impl ArtifactMatch {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportCategory {
    DiscoveryFailed,
    CopyFailed,
    NewFile,
}

impl ReportCategory {
    /// All categories in the order reports are emitted.
    pub const ALL: [Self; 3] = [Self::DiscoveryFailed, Self::CopyFailed, Self::NewFile];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::DiscoveryFailed => "Build output folder looks empty.\nCould not find:",
            Self::CopyFailed => {
                "Could not copy compiled artifacts.\nCheck that the destination files are not read-only:"
            }
            Self::NewFile => {
                "New source files were added, so their compiled artifacts were copied into the source tree.\nAdd the copied artifacts to version control:"
            }
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::DiscoveryFailed => "Artifacts not found",
            Self::CopyFailed => "Copy failed",
            Self::NewFile => "New files",
        }
    }

    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::DiscoveryFailed | Self::CopyFailed)
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
