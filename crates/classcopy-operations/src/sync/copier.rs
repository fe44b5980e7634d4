use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use classcopy_core::ArtifactMatch;
use thiserror::Error;
use tracing::{debug, warn};

use crate::traits::WritabilityControl;

#[derive(Debug, Error)]
#[error("failed to copy artifact to '{path}'")]
pub struct CopyFailed {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Copies artifacts into a source directory, replacing existing files.
pub struct ArtifactCopier<'a, W: ?Sized> {
    writability: &'a W,
}

impl<'a, W> ArtifactCopier<'a, W>
where
    W: WritabilityControl + ?Sized,
{
    #[must_use]
    pub fn new(writability: &'a W) -> Self {
        Self { writability }
    }

    /// Returns the destination path on success.
    ///
    /// # Errors
    ///
    /// Returns [`CopyFailed`] with the destination path if the bytes cannot be
    /// written. A failure to make the destination writable is only logged.
    pub fn copy(
        &self,
        artifact: &ArtifactMatch,
        destination_dir: &Path,
    ) -> Result<PathBuf, CopyFailed> {
        let Some(file_name) = artifact.file_name() else {
            return Err(CopyFailed {
                path: destination_dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "artifact has no file name"),
            });
        };
        let destination = destination_dir.join(file_name);

        if let Err(error) = self.writability.make_writable(&destination) {
            warn!(path = %destination.display(), %error, "could not make destination writable");
        }

        match fs::copy(artifact.path(), &destination) {
            Ok(bytes) => {
                debug!(
                    from = %artifact.path().display(),
                    to = %destination.display(),
                    bytes,
                    "copied artifact"
                );
                Ok(destination)
            }
            Err(source) => Err(CopyFailed {
                path: destination,
                source,
            }),
        }
    }
}
