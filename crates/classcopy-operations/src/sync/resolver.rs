use std::path::{Path, PathBuf, is_separator};

use classcopy_core::{ArtifactNaming, ResolvedIdentity};
use tracing::debug;

use super::BatchContext;

/// Maps a source file to its package-relative identity.
pub struct RootResolver<'a> {
    context: &'a BatchContext,
}

impl<'a> RootResolver<'a> {
    #[must_use]
    pub fn new(context: &'a BatchContext) -> Self {
        Self { context }
    }

    /// Returns `None` when no source root occurs in `file_path`.
    ///
    /// Roots are scanned in order and the last matching root wins. The package
    /// directory is taken from the text following the first occurrence of that
    /// root.
    #[must_use]
    pub fn resolve(&self, file_path: &Path) -> Option<ResolvedIdentity> {
        let text = file_path.to_string_lossy();
        let matching = self.context.root_matching();

        let (root, end) = self
            .context
            .source_roots()
            .iter()
            .filter_map(|root| matching.match_end(&text, root).map(|end| (root, end)))
            .last()?;

        let file_name = file_path.file_name()?.to_string_lossy();
        let remainder = &text[end..];
        let package_dir = remainder
            .rfind(is_separator)
            .map_or("", |i| &remainder[..i])
            .trim_start_matches(is_separator);

        let identity = ResolvedIdentity {
            package_dir: PathBuf::from(package_dir),
            base_name: self.context.naming().base_name(&file_name).to_string(),
            containing_dir: file_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        debug!(
            path = %file_path.display(),
            root,
            package_dir = %identity.package_dir.display(),
            base_name = %identity.base_name,
            "resolved source file"
        );
        Some(identity)
    }
}
