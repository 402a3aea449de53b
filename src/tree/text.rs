use std::path::Path;

use anyhow::Result;

use crate::fs::FileSystem;
use crate::models::{EntryKind, Rendered};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const LAST_CONTINUATION: &str = "    ";

/// Render the children of `directory` as ASCII-art tree lines.
///
/// Each directory is listed live as it is reached; nothing is snapshotted up
/// front. Every line starts with `prefix`, and nested levels extend it with a
/// continuation glyph. Only real directories are descended into, so symbolic
/// links count as files here.
pub fn render_text<F: FileSystem + ?Sized>(
    fs: &F,
    directory: &Path,
    prefix: &str,
    include_hidden: bool,
) -> Result<Rendered> {
    let mut children = fs.list_dir(directory)?;
    children.retain(|child| include_hidden || !child.hidden);
    children.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

    let mut rendered = Rendered::default();
    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let (branch, continuation) = if is_last {
            (LAST_BRANCH, LAST_CONTINUATION)
        } else {
            (BRANCH, CONTINUATION)
        };

        rendered.lines.push(format!("{prefix}{branch}{}", child.name));

        if child.kind == EntryKind::Directory {
            rendered.directories += 1;
            let nested_prefix = format!("{prefix}{continuation}");
            let nested = render_text(fs, &child.path, &nested_prefix, include_hidden)?;
            rendered.absorb(nested);
        } else {
            rendered.files += 1;
        }
    }

    Ok(rendered)
}
