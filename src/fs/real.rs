use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs::DirEntry;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Copy, Debug, Default)]
pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    fn list_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        list_blocking(dir)
    }

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || list_blocking(&dir)).await?
    }
}

fn list_blocking(dir: &Path) -> Result<Vec<FsEntry>> {
    let mut entries = Vec::new();
    let read_dir = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        entries.push(to_fs_entry(&entry)?);
    }
    Ok(entries)
}

fn to_fs_entry(entry: &DirEntry) -> Result<FsEntry> {
    let path = entry.path();
    let file_type = entry
        .file_type()
        .with_context(|| format!("failed to read file type of {}", path.display()))?;

    // Directory wins over link; a link is never followed.
    let kind = if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::File
    };

    let mut fs_entry = FsEntry::new(path, kind);
    fs_entry.hidden = fs_entry.hidden || has_hidden_attribute(entry)?;
    Ok(fs_entry)
}

#[cfg(windows)]
fn has_hidden_attribute(entry: &DirEntry) -> Result<bool> {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    let metadata = entry
        .metadata()
        .with_context(|| format!("failed to read attributes of {}", entry.path().display()))?;
    Ok(metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
}

#[cfg(not(windows))]
fn has_hidden_attribute(_entry: &DirEntry) -> Result<bool> {
    Ok(false)
}
