use classcopy_core::ReportCategory;
use serde::Serialize;

use crate::traits::ReportSink;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedReport {
    pub category: ReportCategory,
    pub header: String,
    pub detail: String,
}

/// Keeps published reports in memory for later rendering.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Vec<PublishedReport>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reports(&self) -> &[PublishedReport] {
        &self.reports
    }

    #[must_use]
    pub fn into_reports(self) -> Vec<PublishedReport> {
        self.reports
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(|r| r.category.is_failure())
    }
}

impl ReportSink for CollectingSink {
    fn publish(&mut self, category: ReportCategory, header: &str, detail: &str) {
        self.reports.push(PublishedReport {
            category,
            header: header.to_string(),
            detail: detail.to_string(),
        });
    }
}
