mod change_source;
mod layout_provider;
mod report_sink;
mod writability;

pub use change_source::ChangeSource;
pub use layout_provider::LayoutProvider;
pub use report_sink::ReportSink;
pub use writability::WritabilityControl;
