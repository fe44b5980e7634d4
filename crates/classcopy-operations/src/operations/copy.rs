use std::path::{Path, PathBuf};

use crate::Result;
use crate::sync::{BatchContext, BatchOutcome, run_batch};
use crate::traits::{ChangeSource, LayoutProvider, ReportSink, WritabilityControl};

pub struct CopyOutput {
    pub project_root: PathBuf,
    pub record_count: usize,
    pub outcome: BatchOutcome,
}

pub struct CopyOperation<L, C, W> {
    layout_provider: L,
    change_source: C,
    writability: W,
}

impl<L, C, W> CopyOperation<L, C, W>
where
    L: LayoutProvider,
    C: ChangeSource,
    W: WritabilityControl,
{
    pub fn new(layout_provider: L, change_source: C, writability: W) -> Self {
        Self {
            layout_provider,
            change_source,
            writability,
        }
    }

    /// Runs one batch over the current changes and flushes reports to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be loaded or the changes cannot be
    /// read. Per-file failures are reported to `sink` instead.
    pub fn execute<S>(&self, start_path: &Path, sink: &mut S) -> Result<CopyOutput>
    where
        S: ReportSink + ?Sized,
    {
        let layout = self.layout_provider.load_layout(start_path)?;
        let context = BatchContext::from_layout(&layout);
        let records = self.change_source.changes(layout.root())?;

        let outcome = run_batch(&context, &records, &self.writability, sink);

        Ok(CopyOutput {
            project_root: layout.root().to_path_buf(),
            record_count: records.len(),
            outcome,
        })
    }
}
