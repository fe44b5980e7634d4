use std::path::Path;

use classcopy_core::{ArtifactMatch, ResolvedIdentity};
use classcopy_operations::operations::FindOutput;
use serde::Serialize;

use super::{CopySummary, OutputFormatter};
use crate::error::Result;

pub(crate) struct JsonFormatter;

#[derive(Serialize)]
struct IdentityView<'a> {
    file: &'a Path,
    identity: Option<&'a ResolvedIdentity>,
}

#[derive(Serialize)]
struct FindView<'a> {
    file: &'a Path,
    identity: Option<&'a ResolvedIdentity>,
    artifacts: Option<&'a [ArtifactMatch]>,
    error: Option<String>,
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

impl OutputFormatter for JsonFormatter {
    fn format_copy(&self, summary: &CopySummary<'_>) -> Result<String> {
        render(summary)
    }

    fn format_identity(&self, file: &Path, identity: Option<&ResolvedIdentity>) -> Result<String> {
        render(&IdentityView { file, identity })
    }

    fn format_find(&self, file: &Path, output: Option<&FindOutput>) -> Result<String> {
        let view = match output {
            None => FindView {
                file,
                identity: None,
                artifacts: None,
                error: None,
            },
            Some(found) => FindView {
                file,
                identity: Some(&found.identity),
                artifacts: found.artifacts.as_deref().ok(),
                error: found.artifacts.as_ref().err().map(ToString::to_string),
            },
        };
        render(&view)
    }
}
