use std::path::Path;

use classcopy_core::ChangeKind;
use classcopy_operations::operations::CopyOperation;
use classcopy_operations::providers::{
    CollectingSink, FileSystemLayoutProvider, Git2ChangeSource, PermissionsWritability,
    StaticChangeSource,
};
use classcopy_operations::traits::ChangeSource;
use tracing::debug;

use super::CopyArgs;
use crate::error::{CliError, Result};
use crate::output::CopySummary;
use crate::paths::absolute_file;

pub(crate) fn run(args: CopyArgs, start_path: &Path) -> Result<()> {
    let change_source = change_source(&args)?;
    let operation = CopyOperation::new(
        FileSystemLayoutProvider::with_overrides(args.layout.overrides()),
        change_source,
        PermissionsWritability::new(),
    );

    let mut sink = CollectingSink::new();
    let output = operation.execute(start_path, &mut sink)?;
    let failed = sink.has_failures();
    let reports = sink.into_reports();

    let summary = CopySummary {
        project_root: &output.project_root,
        record_count: output.record_count,
        reports: &reports,
        outcome: &output.outcome,
    };
    print!("{}", args.format.formatter().format_copy(&summary)?);

    if failed {
        Err(CliError::CopyFailed {
            count: output.outcome.discovery_failures.len() + output.outcome.copy_failures.len(),
        })
    } else {
        Ok(())
    }
}

fn change_source(args: &CopyArgs) -> Result<Box<dyn ChangeSource>> {
    if !args.files.is_empty() {
        let kind = if args.added {
            ChangeKind::Added
        } else {
            ChangeKind::Modified
        };
        let paths = args
            .files
            .iter()
            .map(|path| absolute_file(path))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = paths.len(), %kind, "using explicit file list");
        return Ok(Box::new(StaticChangeSource::new(paths, kind)));
    }

    debug!(since = ?args.since, "using git change source");
    Ok(match &args.since {
        Some(base) => Box::new(Git2ChangeSource::since(base.clone())),
        None => Box::new(Git2ChangeSource::new()),
    })
}
