use std::io;
use std::path::Path;

/// Best-effort removal of read-only protection before a file is overwritten.
pub trait WritabilityControl: Send + Sync {
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but its permissions cannot be
    /// changed.
    fn make_writable(&self, path: &Path) -> io::Result<()>;
}
