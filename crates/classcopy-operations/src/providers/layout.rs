use std::path::Path;

use classcopy_project::{ConfigOverrides, ProjectLayout, load_layout};

use crate::Result;
use crate::traits::LayoutProvider;

/// Reads `classcopy.toml` and applies command-line overrides.
#[derive(Default)]
pub struct FileSystemLayoutProvider {
    overrides: ConfigOverrides,
}

impl FileSystemLayoutProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        Self { overrides }
    }
}

impl LayoutProvider for FileSystemLayoutProvider {
    fn load_layout(&self, start_path: &Path) -> Result<ProjectLayout> {
        Ok(load_layout(start_path, &self.overrides)?)
    }
}
