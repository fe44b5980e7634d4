use classcopy_core::ReportCategory;

/// Receives the consolidated reports at the end of a batch.
pub trait ReportSink {
    fn publish(&mut self, category: ReportCategory, header: &str, detail: &str);
}
