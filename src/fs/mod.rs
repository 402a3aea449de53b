mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::FsEntry;

/// Read-only view of a directory hierarchy.
///
/// Listings are unordered; callers sort. Every failure carries the path that
/// could not be read.
#[async_trait]
pub trait FileSystem: Send + Sync {
    fn list_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        self.list_dir(dir)
    }
}
