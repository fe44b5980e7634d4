use classcopy_core::RootMatching;
use serde::Deserialize;

/// On-disk shape of `classcopy.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub(crate) source_roots: Option<Vec<String>>,
    pub(crate) output_root: Option<String>,
    #[serde(default)]
    pub(crate) ignored_files: Vec<String>,
    pub(crate) root_matching: Option<RootMatching>,
    #[serde(default)]
    pub(crate) naming: NamingSection,
    #[serde(default)]
    pub(crate) report: ReportSection,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct NamingSection {
    pub(crate) source_extension: Option<String>,
    pub(crate) artifact_extension: Option<String>,
    pub(crate) nested_separator: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ReportSection {
    pub(crate) deduplicate: Option<bool>,
}
