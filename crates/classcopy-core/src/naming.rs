use crate::error::{NamingError, Result};

pub const DEFAULT_SOURCE_EXTENSION: &str = "java";
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "class";
pub const DEFAULT_NESTED_SEPARATOR: char = '$';

/// Naming scheme linking a source file to its compiled artifacts.
pub trait ArtifactNaming {
    fn is_source_file(&self, file_name: &str) -> bool;

    /// Strips the source extension from `file_name`, returning it unchanged
    /// when the extension is absent.
    fn base_name<'a>(&self, file_name: &'a str) -> &'a str;

    /// Whether `file_name` is an artifact produced from the source whose base
    /// name is `base_name`, including nested-type artifacts.
    fn is_artifact_of(&self, base_name: &str, file_name: &str) -> bool;
}

/// Extension-plus-separator naming, e.g. `Foo.java` -> `Foo.class`, `Foo$Inner.class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    source_extension: String,
    artifact_extension: String,
    nested_separator: char,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            artifact_extension: DEFAULT_ARTIFACT_EXTENSION.to_string(),
            nested_separator: DEFAULT_NESTED_SEPARATOR,
        }
    }
}

impl NamingConvention {
    /// # Errors
    ///
    /// Returns an error if either extension is empty, starts with a dot or
    /// contains a path separator, or if the separator is not a single character.
    pub fn new(
        source_extension: &str,
        artifact_extension: &str,
        nested_separator: &str,
    ) -> Result<Self> {
        let mut chars = nested_separator.chars();
        let separator = match (chars.next(), chars.next()) {
            (Some(c), None) if !std::path::is_separator(c) => c,
            _ => return Err(NamingError::InvalidSeparator(nested_separator.to_string())),
        };

        Ok(Self {
            source_extension: validate_extension("source", source_extension)?,
            artifact_extension: validate_extension("artifact", artifact_extension)?,
            nested_separator: separator,
        })
    }

    #[must_use]
    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    #[must_use]
    pub fn artifact_extension(&self) -> &str {
        &self.artifact_extension
    }

    #[must_use]
    pub fn nested_separator(&self) -> char {
        self.nested_separator
    }
}

fn validate_extension(field: &'static str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(NamingError::EmptyExtension { field });
    }
    if value.starts_with('.') || value.chars().any(std::path::is_separator) {
        return Err(NamingError::InvalidExtension {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

fn strip_extension<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    file_name.strip_suffix(extension)?.strip_suffix('.')
}

impl ArtifactNaming for NamingConvention {
    fn is_source_file(&self, file_name: &str) -> bool {
        strip_extension(file_name, &self.source_extension).is_some()
    }

    fn base_name<'a>(&self, file_name: &'a str) -> &'a str {
        strip_extension(file_name, &self.source_extension).unwrap_or(file_name)
    }

    fn is_artifact_of(&self, base_name: &str, file_name: &str) -> bool {
        let Some(stem) = strip_extension(file_name, &self.artifact_extension) else {
            return false;
        };

        if stem == base_name {
            return true;
        }

        stem.strip_prefix(base_name)
            .and_then(|rest| rest.strip_prefix(self.nested_separator))
            .is_some_and(|suffix| !suffix.is_empty())
    }
}
