use std::path::Path;

use classcopy_operations::operations::InspectOperation;
use classcopy_operations::providers::FileSystemLayoutProvider;

use super::FileArgs;
use crate::error::Result;
use crate::paths::absolute_file;

pub(crate) fn run(args: FileArgs, start_path: &Path) -> Result<()> {
    let file = absolute_file(&args.file)?;
    let operation =
        InspectOperation::new(FileSystemLayoutProvider::with_overrides(args.layout.overrides()));

    let identity = operation.resolve(start_path, &file)?;

    print!(
        "{}",
        args.format
            .formatter()
            .format_identity(&file, identity.as_ref())?
    );
    Ok(())
}
