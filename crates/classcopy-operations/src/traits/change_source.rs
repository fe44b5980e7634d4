use std::path::Path;

use classcopy_core::ChangeRecord;

use crate::Result;

pub trait ChangeSource: Send + Sync {
    /// Changed files for one batch, with absolute paths, in processing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying change information cannot be read.
    fn changes(&self, project_root: &Path) -> Result<Vec<ChangeRecord>>;
}

impl<T> ChangeSource for Box<T>
where
    T: ChangeSource + ?Sized,
{
    fn changes(&self, project_root: &Path) -> Result<Vec<ChangeRecord>> {
        (**self).changes(project_root)
    }
}
