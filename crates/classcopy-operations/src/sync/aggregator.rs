use std::path::Path;

use classcopy_core::ReportCategory;
use indexmap::IndexSet;
use tracing::debug;

use crate::traits::ReportSink;

const DETAIL_SEPARATOR: &str = ",\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AggregatorState {
    Idle,
    Collecting,
}

#[derive(Debug)]
enum Details {
    Repeated(Vec<String>),
    Unique(IndexSet<String>),
}

impl Details {
    fn new(deduplicate: bool) -> Self {
        if deduplicate {
            Self::Unique(IndexSet::new())
        } else {
            Self::Repeated(Vec::new())
        }
    }

    fn push(&mut self, detail: String) {
        match self {
            Self::Repeated(items) => items.push(detail),
            Self::Unique(items) => {
                items.insert(detail);
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Repeated(items) => items.len(),
            Self::Unique(items) => items.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn join(&self) -> String {
        match self {
            Self::Repeated(items) => items.join(DETAIL_SEPARATOR),
            Self::Unique(items) => items
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(DETAIL_SEPARATOR),
        }
    }
}

/// Collects per-record outcomes and publishes one report per category.
///
/// Reports go out in [`ReportCategory::ALL`] order and empty categories are
/// not published. [`flush`](Self::flush) consumes the aggregator.
#[derive(Debug)]
pub struct ResultAggregator {
    discovery_failed: Details,
    copy_failed: Details,
    new_file: Details,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_deduplication(false)
    }

    /// With `deduplicate`, repeated details are kept once in first-seen order.
    #[must_use]
    pub fn with_deduplication(deduplicate: bool) -> Self {
        Self {
            discovery_failed: Details::new(deduplicate),
            copy_failed: Details::new(deduplicate),
            new_file: Details::new(deduplicate),
        }
    }

    pub fn add_new_file(&mut self, path: &Path) {
        self.add(ReportCategory::NewFile, path);
    }

    pub fn add_discovery_failure(&mut self, path: &Path) {
        self.add(ReportCategory::DiscoveryFailed, path);
    }

    pub fn add_copy_failure(&mut self, path: &Path) {
        self.add(ReportCategory::CopyFailed, path);
    }

    pub fn add(&mut self, category: ReportCategory, path: &Path) {
        self.details_mut(category).push(path.display().to_string());
    }

    #[must_use]
    pub fn len(&self, category: ReportCategory) -> usize {
        self.details(category).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ReportCategory::ALL
            .iter()
            .all(|&c| self.details(c).is_empty())
    }

    fn state(&self) -> AggregatorState {
        if self.is_empty() {
            AggregatorState::Idle
        } else {
            AggregatorState::Collecting
        }
    }

    /// Returns the number of reports published.
    pub fn flush<S>(self, sink: &mut S) -> usize
    where
        S: ReportSink + ?Sized,
    {
        if self.state() == AggregatorState::Idle {
            debug!("nothing to report");
            return 0;
        }
        let mut published = 0;
        for category in ReportCategory::ALL {
            let details = self.details(category);
            if details.is_empty() {
                continue;
            }
            debug!(%category, entries = details.len(), "publishing report");
            sink.publish(category, category.header(), &details.join());
            published += 1;
        }
        published
    }

    fn details(&self, category: ReportCategory) -> &Details {
        match category {
            ReportCategory::DiscoveryFailed => &self.discovery_failed,
            ReportCategory::CopyFailed => &self.copy_failed,
            ReportCategory::NewFile => &self.new_file,
        }
    }

    fn details_mut(&mut self, category: ReportCategory) -> &mut Details {
        match category {
            ReportCategory::DiscoveryFailed => &mut self.discovery_failed,
            ReportCategory::CopyFailed => &mut self.copy_failed,
            ReportCategory::NewFile => &mut self.new_file,
        }
    }
}
