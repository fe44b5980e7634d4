//! The copy pipeline: resolve each changed source file, locate its compiled
//! artifacts, copy them next to the source, and report once per batch.

mod aggregator;
mod batch;
mod context;
mod copier;
mod locator;
mod resolver;

pub use aggregator::ResultAggregator;
pub use batch::{BatchOutcome, CopiedArtifact, run_batch};
pub use context::BatchContext;
pub use copier::{ArtifactCopier, CopyFailed};
pub use locator::{ArtifactLocator, DiscoveryFailed, MAX_SEARCH_DEPTH};
pub use resolver::RootResolver;
