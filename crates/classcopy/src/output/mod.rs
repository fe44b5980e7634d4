mod formatter;
mod json;
mod plain;

use std::path::Path;

use classcopy_operations::providers::PublishedReport;
use classcopy_operations::sync::BatchOutcome;
use serde::Serialize;

pub(crate) use formatter::OutputFormatter;
pub(crate) use json::JsonFormatter;
pub(crate) use plain::PlainTextFormatter;

/// Everything a copy run prints.
#[derive(Serialize)]
pub(crate) struct CopySummary<'a> {
    pub project_root: &'a Path,
    pub record_count: usize,
    pub reports: &'a [PublishedReport],
    pub outcome: &'a BatchOutcome,
}
