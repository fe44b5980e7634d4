use std::fs::{self, Permissions};
use std::io;
use std::path::Path;

use tracing::debug;

use crate::traits::WritabilityControl;

/// Grants owner write permission on an existing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissionsWritability;

impl PermissionsWritability {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl WritabilityControl for PermissionsWritability {
    fn make_writable(&self, path: &Path) -> io::Result<()> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };

        let mut permissions = metadata.permissions();
        if is_owner_writable(&permissions) {
            return Ok(());
        }

        grant_owner_write(&mut permissions);
        debug!(path = %path.display(), "clearing read-only flag");
        fs::set_permissions(path, permissions)
    }
}

#[cfg(unix)]
fn is_owner_writable(permissions: &Permissions) -> bool {
    use std::os::unix::fs::PermissionsExt;
    permissions.mode() & 0o200 != 0
}

#[cfg(unix)]
fn grant_owner_write(permissions: &mut Permissions) {
    use std::os::unix::fs::PermissionsExt;
    permissions.set_mode(permissions.mode() | 0o200);
}

#[cfg(not(unix))]
fn is_owner_writable(permissions: &Permissions) -> bool {
    !permissions.readonly()
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn grant_owner_write(permissions: &mut Permissions) {
    permissions.set_readonly(false);
}
