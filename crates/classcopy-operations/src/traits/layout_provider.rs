use std::path::Path;

use classcopy_project::ProjectLayout;

use crate::Result;

pub trait LayoutProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the project cannot be discovered or its
    /// configuration is invalid.
    fn load_layout(&self, start_path: &Path) -> Result<ProjectLayout>;
}
