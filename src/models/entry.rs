use std::borrow::Cow;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    Symlink,
    File,
}

impl EntryKind {
    /// Literal used for the `"type"` field of JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::Symlink => "link",
            EntryKind::File => "file",
        }
    }
}

/// One row of a raw directory listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
    pub hidden: bool,
}

impl FsEntry {
    /// Builds a listing row whose name and hidden flag come from the last path component.
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let path = path.into();
        let name = base_name(&path).into_owned();
        let hidden = name.starts_with('.');
        Self {
            path,
            name,
            kind,
            hidden,
        }
    }
}

/// A node captured by enumeration, linked to its containing directory.
///
/// The child counts are only meaningful for directories: they record how many
/// direct children the directory had when it was listed, and how many of
/// those were hidden. Both are zero for files and links.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub parent_path: PathBuf,
    pub hidden: bool,
    pub child_count: usize,
    pub hidden_child_count: usize,
}

impl Entry {
    pub fn name(&self) -> Cow<'_, str> {
        base_name(&self.path)
    }

    /// Whether the directory had any children that survive the hidden filter.
    pub fn has_children(&self, include_hidden: bool) -> bool {
        if include_hidden {
            self.child_count > 0
        } else {
            self.child_count > self.hidden_child_count
        }
    }
}

pub(crate) fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(child_count: usize, hidden_child_count: usize) -> Entry {
        Entry {
            path: PathBuf::from("/root/dir"),
            kind: EntryKind::Directory,
            parent_path: PathBuf::from("/root"),
            hidden: false,
            child_count,
            hidden_child_count,
        }
    }

    #[test]
    fn fs_entry_derives_name_and_hidden_flag() {
        let entry = FsEntry::new("/root/.config", EntryKind::Directory);
        assert_eq!(entry.name, ".config");
        assert!(entry.hidden);

        let entry = FsEntry::new("/root/notes.txt", EntryKind::File);
        assert_eq!(entry.name, "notes.txt");
        assert!(!entry.hidden);
    }

    #[test]
    fn only_hidden_children_count_as_empty_when_hidden_are_excluded() {
        let entry = dir(2, 2);
        assert!(entry.has_children(true));
        assert!(!entry.has_children(false));

        let entry = dir(0, 0);
        assert!(!entry.has_children(true));
        assert!(!entry.has_children(false));

        let entry = dir(3, 1);
        assert!(entry.has_children(false));
    }

    #[test]
    fn kind_literals() {
        assert_eq!(EntryKind::Directory.as_str(), "directory");
        assert_eq!(EntryKind::Symlink.as_str(), "link");
        assert_eq!(EntryKind::File.as_str(), "file");
    }
}
