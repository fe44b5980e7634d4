use std::path::{Path, is_separator};

use serde::{Deserialize, Serialize};

/// How a source root is located inside a file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootMatching {
    /// Any substring occurrence matches, so `src` also matches `/mysrc/A.java`.
    #[default]
    Substring,
    /// The occurrence must start and end on path-segment boundaries.
    PathSegment,
}

impl RootMatching {
    /// Byte offset just past the first accepted occurrence of `root` in `path`.
    #[must_use]
    pub fn match_end(self, path: &str, root: &str) -> Option<usize> {
        match self {
            Self::Substring => path.find(root).map(|start| start + root.len()),
            Self::PathSegment => path
                .match_indices(root)
                .map(|(start, _)| (start, start + root.len()))
                .find(|&(start, end)| {
                    starts_segment(path, root, start) && ends_segment(path, root, end)
                })
                .map(|(_, end)| end),
        }
    }
}

fn starts_segment(path: &str, root: &str, start: usize) -> bool {
    start == 0 || root.starts_with(is_separator) || path[..start].ends_with(is_separator)
}

fn ends_segment(path: &str, root: &str, end: usize) -> bool {
    end == path.len() || root.ends_with(is_separator) || path[end..].starts_with(is_separator)
}

/// Ordered source-root prefixes for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceRoots {
    roots: Vec<String>,
}

impl SourceRoots {
    /// Empty entries are dropped since they would match every path.
    #[must_use]
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roots: roots
                .into_iter()
                .map(Into::into)
                .filter(|root| !root.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self::new(
            paths
                .into_iter()
                .map(|p| p.as_ref().to_string_lossy().into_owned()),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
