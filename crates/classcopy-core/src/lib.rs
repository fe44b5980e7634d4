pub mod error;
mod naming;
mod roots;
pub mod types;

pub use error::*;
pub use naming::{
    ArtifactNaming, DEFAULT_ARTIFACT_EXTENSION, DEFAULT_NESTED_SEPARATOR, DEFAULT_SOURCE_EXTENSION,
    NamingConvention,
};
pub use roots::{RootMatching, SourceRoots};
pub use types::*;
