use std::path::Path;

use classcopy_core::ResolvedIdentity;
use classcopy_operations::operations::FindOutput;

use super::{CopySummary, OutputFormatter};
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn not_resolved(file: &Path) -> String {
        format!("{} is not under any source root\n", file.display())
    }

    fn format_counts(output: &mut String, summary: &CopySummary<'_>) {
        let outcome = summary.outcome;
        let counts = [
            (outcome.unresolved, "not under any source root"),
            (outcome.skipped, "not a source file"),
            (outcome.ignored, "ignored by patterns"),
        ];
        for (count, reason) in counts {
            if count > 0 {
                output.push_str(&format!("  {count} file(s) {reason}\n"));
            }
        }
    }

    fn format_identity_lines(output: &mut String, identity: &ResolvedIdentity) {
        let package = if identity.package_dir.as_os_str().is_empty() {
            "(top level)".to_string()
        } else {
            identity.package_dir.display().to_string()
        };
        output.push_str(&format!("Package:     {package}\n"));
        output.push_str(&format!("Base name:   {}\n", identity.base_name));
        output.push_str(&format!("Destination: {}\n", identity.containing_dir.display()));
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_copy(&self, summary: &CopySummary<'_>) -> Result<String> {
        let mut output = String::new();

        for report in summary.reports {
            output.push_str(&format!("{}\n", report.header));
            output.push_str(&format!("{}\n", report.detail));
            output.push('\n');
        }

        if summary.record_count == 0 {
            output.push_str("No changed files\n");
            return Ok(output);
        }

        let outcome = summary.outcome;
        output.push_str(&format!(
            "Copied {} artifact(s) for {} changed file(s)\n",
            outcome.copied.len(),
            summary.record_count
        ));
        Self::format_counts(&mut output, summary);
        if outcome.is_success() {
            output.push_str("All artifacts copied\n");
        }

        Ok(output)
    }

    fn format_identity(&self, file: &Path, identity: Option<&ResolvedIdentity>) -> Result<String> {
        let Some(identity) = identity else {
            return Ok(Self::not_resolved(file));
        };

        let mut output = format!("{}\n", file.display());
        Self::format_identity_lines(&mut output, identity);
        Ok(output)
    }

    fn format_find(&self, file: &Path, output: Option<&FindOutput>) -> Result<String> {
        let Some(found) = output else {
            return Ok(Self::not_resolved(file));
        };

        let base_name = &found.identity.base_name;
        let text = match &found.artifacts {
            Err(failure) => format!("{failure}\n"),
            Ok(artifacts) if artifacts.is_empty() => {
                format!("No artifacts found for {base_name}\n")
            }
            Ok(artifacts) => {
                let mut text = format!("Artifacts for {base_name}:\n");
                for artifact in artifacts {
                    text.push_str(&format!("  {}\n", artifact.path().display()));
                }
                text
            }
        };
        Ok(text)
    }
}
