use std::fs::{self, FileType};
use std::io;
use std::path::{Path, PathBuf};

use classcopy_core::{ArtifactMatch, ArtifactNaming};
use thiserror::Error;
use tracing::{debug, warn};

/// Deepest directory level below the search directory that is visited.
pub const MAX_SEARCH_DEPTH: usize = 50;

#[derive(Debug, Error)]
#[error("cannot list build output directory '{path}'")]
pub struct DiscoveryFailed {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Finds compiled artifacts for a source file under the build-output tree.
pub struct ArtifactLocator<'a, N: ?Sized> {
    naming: &'a N,
    max_depth: usize,
}

impl<'a, N> ArtifactLocator<'a, N>
where
    N: ArtifactNaming + ?Sized,
{
    #[must_use]
    pub fn new(naming: &'a N) -> Self {
        Self {
            naming,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walks `output_root/package_dir` for artifacts of `base_name`.
    ///
    /// Symbolic links are not followed. Entries are visited in file-name order
    /// within each directory, and a nested directory that cannot be listed is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryFailed`] if the search directory is missing or
    /// cannot be listed.
    pub fn find(
        &self,
        output_root: &Path,
        package_dir: &Path,
        base_name: &str,
    ) -> Result<Vec<ArtifactMatch>, DiscoveryFailed> {
        let search_dir = if package_dir.as_os_str().is_empty() {
            output_root.to_path_buf()
        } else {
            output_root.join(package_dir)
        };

        let entries = sorted_entries(&search_dir).map_err(|source| DiscoveryFailed {
            path: search_dir.clone(),
            source,
        })?;

        let mut matches = Vec::new();
        self.walk(entries, base_name, 1, &mut matches);

        debug!(
            dir = %search_dir.display(),
            base_name,
            count = matches.len(),
            "located artifacts"
        );
        Ok(matches)
    }

    fn walk(
        &self,
        entries: Vec<(PathBuf, FileType)>,
        base_name: &str,
        depth: usize,
        matches: &mut Vec<ArtifactMatch>,
    ) {
        for (path, file_type) in entries {
            if file_type.is_file() {
                if self.is_match(&path, base_name) {
                    matches.push(ArtifactMatch::new(path));
                }
            } else if file_type.is_dir() && depth < self.max_depth {
                match sorted_entries(&path) {
                    Ok(children) => self.walk(children, base_name, depth + 1, matches),
                    Err(error) => {
                        warn!(dir = %path.display(), %error, "skipping unreadable directory");
                    }
                }
            }
        }
    }

    fn is_match(&self, path: &Path, base_name: &str) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.naming.is_artifact_of(base_name, name))
    }
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<(PathBuf, FileType)>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| {
            let entry = entry?;
            Ok((entry.path(), entry.file_type()?))
        })
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort_by(|(a, _), (b, _)| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
