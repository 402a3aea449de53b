//! Render a directory subtree as an ASCII tree, nested HTML, or JSON.
//!
//! Text output walks the filesystem directly via [`render_text`]. HTML and
//! JSON are produced from a flat snapshot taken once by [`enumerate`], which
//! any number of [`render_html`] / [`render_json`] calls can share.

pub mod fs;
pub mod logging;
pub mod models;
pub mod tree;

use std::path::Path;

pub use fs::{FileSystem, RealFileSystem};
pub use models::{Entry, EntryKind, FsEntry, Rendered};
pub use tree::{enumerate, enumerate_dir, render_html, render_json, render_text, spawn_enumerate};

/// Label printed above a text tree: `.` for the current directory, otherwise
/// the root's base name.
pub fn root_display_name(root_path: &Path, is_current_dir: bool) -> String {
    if is_current_dir {
        return ".".to_owned();
    }

    models::base_name(root_path).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_label() {
        assert_eq!(root_display_name(Path::new("."), true), ".");
        assert_eq!(root_display_name(Path::new("/srv/site"), false), "site");
        assert_eq!(root_display_name(Path::new("/"), false), "/");
    }
}
