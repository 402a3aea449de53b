use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::fs::{FileSystem, RealFileSystem};
use crate::models::{Entry, EntryKind};

/// Snapshot every node below `root` into a flat list sorted by path.
///
/// The root itself is not part of the result. Hidden nodes are dropped
/// together with everything beneath them unless `include_hidden` is set.
/// Symbolic links are recorded but never descended into. The first listing
/// that fails aborts the whole enumeration.
pub async fn enumerate<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    include_hidden: bool,
) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    enumerate_internal(fs, root, include_hidden, &mut entries).await?;
    entries.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

    debug!(
        root = %root.display(),
        entries = entries.len(),
        include_hidden,
        "enumeration finished"
    );
    Ok(entries)
}

/// Enumerate `root` on the host filesystem.
pub async fn enumerate_dir(root: &Path, include_hidden: bool) -> Result<Vec<Entry>> {
    enumerate(&RealFileSystem, root, include_hidden).await
}

/// Run [`enumerate_dir`] as a background task on the current tokio runtime.
pub fn spawn_enumerate(root: PathBuf, include_hidden: bool) -> JoinHandle<Result<Vec<Entry>>> {
    tokio::spawn(async move { enumerate_dir(&root, include_hidden).await })
}

/// Walks the subtree with an explicit work list so depth never grows the
/// call stack. Each pending directory remembers the index of its own entry so
/// its child counts can be filled in once it has been listed.
async fn enumerate_internal<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    include_hidden: bool,
    out: &mut Vec<Entry>,
) -> Result<()> {
    let mut pending: Vec<(PathBuf, Option<usize>)> = vec![(root.to_path_buf(), None)];

    while let Some((dir, owner)) = pending.pop() {
        let listing = fs.read_dir(&dir).await?;
        debug!(dir = %dir.display(), children = listing.len(), "listed directory");

        if let Some(index) = owner {
            out[index].child_count = listing.len();
            out[index].hidden_child_count = listing.iter().filter(|c| c.hidden).count();
        }

        for child in listing {
            if child.hidden && !include_hidden {
                continue;
            }
            if child.kind == EntryKind::Directory {
                pending.push((child.path.clone(), Some(out.len())));
            }
            out.push(Entry {
                path: child.path,
                kind: child.kind,
                parent_path: dir.clone(),
                hidden: child.hidden,
                child_count: 0,
                hidden_child_count: 0,
            });
        }
    }

    Ok(())
}
