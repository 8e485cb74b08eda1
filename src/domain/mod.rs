pub mod entry;

pub use entry::{ContentKind, Entry, EntrySnapshot};
