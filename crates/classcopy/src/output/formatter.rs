use std::path::Path;

use classcopy_core::ResolvedIdentity;
use classcopy_operations::operations::FindOutput;

use super::CopySummary;
use crate::error::Result;

pub(crate) trait OutputFormatter {
    fn format_copy(&self, summary: &CopySummary<'_>) -> Result<String>;

    fn format_identity(&self, file: &Path, identity: Option<&ResolvedIdentity>) -> Result<String>;

    fn format_find(&self, file: &Path, output: Option<&FindOutput>) -> Result<String>;
}
