mod config;
mod config_file;
mod error;
mod layout;
mod project;

pub const CONFIG_FILE_NAME: &str = "classcopy.toml";
pub const DEFAULT_SOURCE_ROOT: &str = "src";
pub const DEFAULT_OUTPUT_ROOT: &str = "out";

pub use config::{ProjectConfig, parse_config, parse_config_str};
pub use error::ProjectError;
pub use layout::{ConfigOverrides, ProjectLayout, load_layout};
pub use project::{ClassCopyProject, discover_project};

pub type Result<T> = std::result::Result<T, ProjectError>;
