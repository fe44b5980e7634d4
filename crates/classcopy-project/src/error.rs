use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no classcopy.toml found traversing from '{start_dir}'")]
    NotFound { start_dir: PathBuf },

    #[error("cannot access start path '{path}'")]
    StartPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid naming convention in '{path}'")]
    Naming {
        path: PathBuf,
        #[source]
        source: classcopy_core::NamingError,
    },

    #[error("invalid glob pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
