use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use classcopy_core::ChangeRecord;
use classcopy_project::{ProjectConfig, ProjectLayout};

use crate::Result;
use crate::traits::{ChangeSource, LayoutProvider, WritabilityControl};

pub struct RecordingWritability {
    calls: Mutex<Vec<PathBuf>>,
    fail: bool,
}

impl RecordingWritability {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl Default for RecordingWritability {
    fn default() -> Self {
        Self::new()
    }
}

impl WritabilityControl for RecordingWritability {
    fn make_writable(&self, path: &Path) -> io::Result<()> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(path.to_path_buf());
        if self.fail {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock permission failure",
            ))
        } else {
            Ok(())
        }
    }
}

pub struct MockLayoutProvider {
    layout: ProjectLayout,
}

impl MockLayoutProvider {
    #[must_use]
    pub fn new(root: &Path, config: ProjectConfig) -> Self {
        Self {
            layout: ProjectLayout::new(root.to_path_buf(), config),
        }
    }

    /// Source root `src` and output root `out` under `root`.
    #[must_use]
    pub fn standard(root: &Path) -> Self {
        Self::new(root, ProjectConfig::default())
    }
}

impl LayoutProvider for MockLayoutProvider {
    fn load_layout(&self, _start_path: &Path) -> Result<ProjectLayout> {
        Ok(self.layout.clone())
    }
}

pub struct MockChangeSource {
    records: Vec<ChangeRecord>,
    fail: bool,
}

impl MockChangeSource {
    #[must_use]
    pub fn new(records: Vec<ChangeRecord>) -> Self {
        Self {
            records,
            fail: false,
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
        }
    }
}

impl ChangeSource for MockChangeSource {
    fn changes(&self, _project_root: &Path) -> Result<Vec<ChangeRecord>> {
        if self.fail {
            return Err(classcopy_git::GitError::RefNotFound {
                refspec: "mock".to_string(),
            }
            .into());
        }
        Ok(self.records.clone())
    }
}
