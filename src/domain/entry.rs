use derive_more::derive::Display;

/// Marks how an entry's content field is to be interpreted by feed readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Plain,
}

/// One changelog section, extracted from the upstream page.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", title)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub updated: String,
    pub id: String,
    pub content: String,
    pub kind: ContentKind,
}

/// The pair of entry sequences produced by one extraction run.
///
/// Both vectors hold the same logical entries in document order; only the
/// content representation differs. They are replaced together as a unit,
/// never updated individually.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub html: Vec<Entry>,
    pub plain: Vec<Entry>,
}
