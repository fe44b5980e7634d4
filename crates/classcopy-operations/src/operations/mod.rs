mod copy;
mod inspect;

pub use copy::{CopyOperation, CopyOutput};
pub use inspect::{FindOutput, InspectOperation};
