mod git;
mod layout;
mod report;
mod static_source;
mod writability;

pub use git::Git2ChangeSource;
pub use layout::FileSystemLayoutProvider;
pub use report::{CollectingSink, PublishedReport};
pub use static_source::StaticChangeSource;
pub use writability::PermissionsWritability;
