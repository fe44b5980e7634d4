use std::path::PathBuf;

use classcopy_core::ChangeRecord;
use serde::Serialize;
use tracing::{debug, info};

use super::{ArtifactCopier, ArtifactLocator, BatchContext, ResultAggregator, RootResolver};
use crate::traits::{ReportSink, WritabilityControl};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedArtifact {
    pub source_file: PathBuf,
    pub destination: PathBuf,
}

/// Per-record results of one batch, alongside the published reports.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub copied: Vec<CopiedArtifact>,
    pub discovery_failures: Vec<PathBuf>,
    pub copy_failures: Vec<PathBuf>,
    /// Records without the source extension.
    pub skipped: usize,
    pub ignored: usize,
    pub unresolved: usize,
    pub reports_published: usize,
}

impl BatchOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.discovery_failures.is_empty() && self.copy_failures.is_empty()
    }
}

/// Processes `records` in order and flushes the aggregated reports to `sink`.
///
/// Per-record failures are reported, never returned.
pub fn run_batch<W, S>(
    context: &BatchContext,
    records: &[ChangeRecord],
    writability: &W,
    sink: &mut S,
) -> BatchOutcome
where
    W: WritabilityControl + ?Sized,
    S: ReportSink + ?Sized,
{
    let resolver = RootResolver::new(context);
    let locator = ArtifactLocator::new(context.naming());
    let copier = ArtifactCopier::new(writability);
    let mut aggregator = ResultAggregator::with_deduplication(context.deduplicate());
    let mut outcome = BatchOutcome::default();

    for record in records {
        if !context.is_source_file(&record.path) {
            debug!(path = %record.path.display(), "skipping non-source file");
            outcome.skipped += 1;
            continue;
        }
        if context.is_ignored(&record.path) {
            debug!(path = %record.path.display(), "skipping ignored file");
            outcome.ignored += 1;
            continue;
        }
        let Some(identity) = resolver.resolve(&record.path) else {
            debug!(path = %record.path.display(), "not under any source root");
            outcome.unresolved += 1;
            continue;
        };

        let artifacts = match locator.find(
            context.output_root(),
            &identity.package_dir,
            &identity.base_name,
        ) {
            Ok(artifacts) => artifacts,
            Err(failure) => {
                debug!(dir = %failure.path.display(), error = %failure.source, "discovery failed");
                aggregator.add_discovery_failure(&failure.path);
                outcome.discovery_failures.push(failure.path);
                continue;
            }
        };

        for artifact in &artifacts {
            match copier.copy(artifact, &identity.containing_dir) {
                Ok(destination) => {
                    if record.is_added() {
                        aggregator.add_new_file(&destination);
                    }
                    outcome.copied.push(CopiedArtifact {
                        source_file: record.path.clone(),
                        destination,
                    });
                }
                Err(failure) => {
                    debug!(path = %failure.path.display(), error = %failure.source, "copy failed");
                    aggregator.add_copy_failure(&failure.path);
                    outcome.copy_failures.push(failure.path);
                }
            }
        }
    }

    outcome.reports_published = aggregator.flush(sink);
    info!(
        records = records.len(),
        copied = outcome.copied.len(),
        failures = outcome.discovery_failures.len() + outcome.copy_failures.len(),
        "batch finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::RecordingWritability;
    use crate::providers::CollectingSink;
    use classcopy_core::{ChangeKind, ReportCategory, SourceRoots};
    use globset::{Glob, GlobSetBuilder};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, content: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    }

    fn context_for(dir: &Path) -> BatchContext {
        BatchContext::new(
            SourceRoots::from_paths([dir.join("src")]),
            dir.join("out"),
        )
    }

    #[test]
    fn mixed_batch_reports_only_discovery_failure() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(&root.join("src/com/a/A.java"), b"class A {}")?;
        write(&root.join("out/com/a/A.class"), b"A bytes")?;
        write(&root.join("lib/B.java"), b"class B {}")?;
        write(&root.join("src/com/c/C.java"), b"class C {}")?;
        let records = vec![
            ChangeRecord::modified(root.join("src/com/a/A.java")),
            ChangeRecord::modified(root.join("lib/B.java")),
            ChangeRecord::modified(root.join("src/com/c/C.java")),
        ];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context_for(root), &records, &writability, &mut sink);

        assert_eq!(writability.calls(), vec![root.join("src/com/a/A.class")]);
        assert_eq!(fs::read(root.join("src/com/a/A.class"))?, b"A bytes");
        assert_eq!(outcome.unresolved, 1);
        assert_eq!(outcome.discovery_failures, vec![root.join("out/com/c")]);
        assert_eq!(outcome.reports_published, 1);
        assert_eq!(sink.reports().len(), 1);
        assert_eq!(sink.reports()[0].category, ReportCategory::DiscoveryFailed);
        assert_eq!(
            sink.reports()[0].detail,
            root.join("out/com/c").display().to_string()
        );
        assert!(!outcome.is_success());
        Ok(())
    }

    #[test]
    fn added_records_report_copied_destinations() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(&root.join("src/pkg/Foo.java"), b"class Foo {}")?;
        write(&root.join("out/pkg/Foo.class"), b"outer")?;
        write(&root.join("out/pkg/Foo$1.class"), b"anonymous")?;
        let records = vec![ChangeRecord::added(root.join("src/pkg/Foo.java"))];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context_for(root), &records, &writability, &mut sink);

        assert!(outcome.is_success());
        assert_eq!(outcome.copied.len(), 2);
        assert_eq!(sink.reports().len(), 1);
        assert_eq!(sink.reports()[0].category, ReportCategory::NewFile);
        assert_eq!(
            sink.reports()[0].detail,
            format!(
                "{},\n{}",
                root.join("src/pkg/Foo$1.class").display(),
                root.join("src/pkg/Foo.class").display()
            )
        );
        Ok(())
    }

    #[test]
    fn modified_and_other_records_report_nothing_on_success() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(&root.join("src/Foo.java"), b"class Foo {}")?;
        write(&root.join("src/Bar.java"), b"class Bar {}")?;
        write(&root.join("out/Foo.class"), b"foo")?;
        write(&root.join("out/Bar.class"), b"bar")?;
        let records = vec![
            ChangeRecord::modified(root.join("src/Foo.java")),
            ChangeRecord::new(root.join("src/Bar.java"), ChangeKind::Other),
        ];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context_for(root), &records, &writability, &mut sink);

        assert_eq!(outcome.copied.len(), 2);
        assert_eq!(outcome.reports_published, 0);
        assert!(sink.reports().is_empty());
        Ok(())
    }

    #[test]
    fn last_copied_artifact_wins_shared_destination() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(&root.join("src/pkg/Foo.java"), b"class Foo {}")?;
        write(&root.join("out/pkg/Foo$Inner.class"), b"first")?;
        write(&root.join("out/pkg/sub/Foo$Inner.class"), b"second")?;
        let records = vec![ChangeRecord::modified(root.join("src/pkg/Foo.java"))];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context_for(root), &records, &writability, &mut sink);

        assert_eq!(outcome.copied.len(), 2);
        assert!(outcome.is_success());
        assert_eq!(fs::read(root.join("src/pkg/Foo$Inner.class"))?, b"second");
        Ok(())
    }

    #[test]
    fn same_source_listed_twice_copies_in_record_order() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(&root.join("src/pkg/Foo.java"), b"class Foo {}")?;
        write(&root.join("out/pkg/Foo.class"), b"foo")?;
        let source = root.join("src/pkg/Foo.java");
        let records = vec![
            ChangeRecord::modified(source.clone()),
            ChangeRecord::added(source.clone()),
        ];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context_for(root), &records, &writability, &mut sink);

        let destination = root.join("src/pkg/Foo.class");
        let copied = CopiedArtifact {
            source_file: source,
            destination: destination.clone(),
        };
        assert_eq!(outcome.copied, vec![copied.clone(), copied]);
        assert_eq!(writability.calls(), vec![destination.clone(), destination.clone()]);
        assert_eq!(fs::read(&destination)?, b"foo");
        assert_eq!(sink.reports().len(), 1);
        assert_eq!(sink.reports()[0].category, ReportCategory::NewFile);
        assert_eq!(sink.reports()[0].detail, destination.display().to_string());
        Ok(())
    }

    #[test]
    fn ignored_records_are_skipped_before_resolution() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new("src/gen/**")?);
        let context = context_for(root).with_ignored_files(root, builder.build()?);
        let records = vec![ChangeRecord::modified(root.join("src/gen/G.java"))];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context, &records, &writability, &mut sink);

        assert_eq!(outcome.ignored, 1);
        assert_eq!(outcome.unresolved, 0);
        assert!(outcome.discovery_failures.is_empty());
        assert!(writability.calls().is_empty());
        assert_eq!(outcome.reports_published, 0);
        assert!(sink.reports().is_empty());
        Ok(())
    }

    #[test]
    fn non_source_files_are_skipped_silently() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(&root.join("src/pkg/notes.txt"), b"notes")?;
        let records = vec![ChangeRecord::modified(root.join("src/pkg/notes.txt"))];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context_for(root), &records, &writability, &mut sink);

        assert_eq!(outcome.skipped, 1);
        assert!(outcome.discovery_failures.is_empty());
        assert!(sink.reports().is_empty());
        Ok(())
    }

    #[test]
    fn copy_failures_are_reported_per_destination() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        write(&root.join("out/pkg/Foo.class"), b"foo")?;
        let records = vec![ChangeRecord::modified(root.join("src/pkg/Foo.java"))];
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context_for(root), &records, &writability, &mut sink);

        assert_eq!(outcome.copy_failures, vec![root.join("src/pkg/Foo.class")]);
        assert_eq!(sink.reports().len(), 1);
        assert_eq!(sink.reports()[0].category, ReportCategory::CopyFailed);
        Ok(())
    }

    #[test]
    fn repeated_failures_collapse_when_deduplicating() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let root = dir.path();
        let records = vec![
            ChangeRecord::modified(root.join("src/pkg/Foo.java")),
            ChangeRecord::modified(root.join("src/pkg/Bar.java")),
        ];
        let context = context_for(root).with_deduplicate(true);
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context, &records, &writability, &mut sink);

        assert_eq!(outcome.discovery_failures.len(), 2);
        assert_eq!(
            sink.reports()[0].detail,
            root.join("out/pkg").display().to_string()
        );
        Ok(())
    }

    #[test]
    fn empty_batch_publishes_nothing() {
        let context = BatchContext::new(SourceRoots::default(), "/out");
        let writability = RecordingWritability::new();
        let mut sink = CollectingSink::new();

        let outcome = run_batch(&context, &[], &writability, &mut sink);

        assert!(outcome.is_success());
        assert_eq!(outcome.reports_published, 0);
        assert!(sink.reports().is_empty());
    }
}
