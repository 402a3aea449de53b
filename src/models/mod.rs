mod entry;
mod rendered;

pub use entry::{Entry, EntryKind, FsEntry};
pub use rendered::Rendered;

pub(crate) use entry::base_name;
