use std::path::Path;

use classcopy_core::{ArtifactMatch, ResolvedIdentity};

use crate::Result;
use crate::sync::{ArtifactLocator, BatchContext, DiscoveryFailed, RootResolver};
use crate::traits::LayoutProvider;

pub struct FindOutput {
    pub identity: ResolvedIdentity,
    pub artifacts: std::result::Result<Vec<ArtifactMatch>, DiscoveryFailed>,
}

/// Read-only views of the pipeline for a single file.
pub struct InspectOperation<L> {
    layout_provider: L,
}

impl<L> InspectOperation<L>
where
    L: LayoutProvider,
{
    pub fn new(layout_provider: L) -> Self {
        Self { layout_provider }
    }

    /// # Errors
    ///
    /// Returns an error if the project layout cannot be loaded.
    pub fn resolve(&self, start_path: &Path, file: &Path) -> Result<Option<ResolvedIdentity>> {
        let context = self.context(start_path)?;
        Ok(RootResolver::new(&context).resolve(file))
    }

    /// Locates the artifacts that a copy of `file` would use, without copying.
    ///
    /// Returns `None` when the file is not under any source root.
    ///
    /// # Errors
    ///
    /// Returns an error if the project layout cannot be loaded.
    pub fn find(&self, start_path: &Path, file: &Path) -> Result<Option<FindOutput>> {
        let context = self.context(start_path)?;
        let Some(identity) = RootResolver::new(&context).resolve(file) else {
            return Ok(None);
        };

        let artifacts = ArtifactLocator::new(context.naming()).find(
            context.output_root(),
            &identity.package_dir,
            &identity.base_name,
        );

        Ok(Some(FindOutput {
            identity,
            artifacts,
        }))
    }

    fn context(&self, start_path: &Path) -> Result<BatchContext> {
        let layout = self.layout_provider.load_layout(start_path)?;
        Ok(BatchContext::from_layout(&layout))
    }
}
