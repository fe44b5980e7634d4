mod copy;
mod find;
mod resolve;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use classcopy_core::RootMatching;
use classcopy_project::ConfigOverrides;

use crate::error::Result;
use crate::output::{JsonFormatter, OutputFormatter, PlainTextFormatter};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Copy compiled artifacts of changed sources into the source tree
    Copy(CopyArgs),
    /// Show how a source file maps onto the build output
    Resolve(FileArgs),
    /// List the artifacts a copy would use, without copying
    Find(FileArgs),
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Copy(args) => copy::run(args, start_path),
            Self::Resolve(args) => resolve::run(args, start_path),
            Self::Find(args) => find::run(args, start_path),
        }
    }
}

#[derive(Args)]
pub(crate) struct LayoutArgs {
    /// Source root, relative to the project root (repeatable; replaces configured roots)
    #[arg(long = "source-root", value_name = "DIR")]
    source_roots: Vec<PathBuf>,

    /// Build output root, relative to the project root
    #[arg(long, value_name = "DIR")]
    output_root: Option<PathBuf>,

    /// How source roots are matched inside file paths
    #[arg(long, value_enum)]
    root_matching: Option<MatchingArg>,
}

impl LayoutArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_roots: self.source_roots.clone(),
            output_root: self.output_root.clone(),
            root_matching: self.root_matching.map(RootMatching::from),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum MatchingArg {
    Substring,
    PathSegment,
}

impl From<MatchingArg> for RootMatching {
    fn from(arg: MatchingArg) -> Self {
        match arg {
            MatchingArg::Substring => Self::Substring,
            MatchingArg::PathSegment => Self::PathSegment,
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainTextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

#[derive(Args)]
pub(crate) struct CopyArgs {
    /// Use changes committed since this ref, plus the working tree
    #[arg(long, value_name = "REF", conflicts_with = "files")]
    since: Option<String>,

    /// Process these files instead of asking git
    #[arg(long, num_args = 1.., value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Treat the files given with --files as newly added
    #[arg(long, requires = "files")]
    added: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Args)]
pub(crate) struct FileArgs {
    /// Source file to inspect
    file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    #[command(flatten)]
    layout: LayoutArgs,
}
