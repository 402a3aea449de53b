use std::path::Path;

use serde_json::Value;

use crate::models::{Entry, EntryKind, Rendered};

/// Render the children of `parent` from an enumerated list as nested
/// collapsible HTML.
///
/// Directories become `<details>` elements; everything else becomes a line of
/// text followed by `<br>`.
pub fn render_html(entries: &[Entry], parent: &Path, include_hidden: bool) -> Rendered {
    render_nested(&Html, entries, parent, include_hidden)
}

/// Render the children of `parent` from an enumerated list as JSON fragments.
///
/// Joining the fragments and wrapping them in `[` and `]` yields a valid JSON
/// array.
pub fn render_json(entries: &[Entry], parent: &Path, include_hidden: bool) -> Rendered {
    render_nested(&Json, entries, parent, include_hidden)
}

/// Literal fragments for one output format. `last` marks the final child at a
/// nesting level.
trait Markup {
    fn leaf(&self, entry: &Entry, last: bool) -> String;
    fn empty_dir(&self, entry: &Entry, last: bool) -> String;
    fn open_dir(&self, entry: &Entry) -> String;
    fn close_dir(&self, last: bool) -> String;
}

fn render_nested<M: Markup>(
    markup: &M,
    entries: &[Entry],
    parent: &Path,
    include_hidden: bool,
) -> Rendered {
    let children: Vec<&Entry> = entries
        .iter()
        .filter(|entry| entry.parent_path == parent && (include_hidden || !entry.hidden))
        .collect();

    let mut rendered = Rendered::default();
    let Some(last_path) = children.last().map(|entry| entry.path.as_path()) else {
        return rendered;
    };

    for child in &children {
        let last = child.path == last_path;
        match child.kind {
            EntryKind::Directory => {
                rendered.directories += 1;
                if child.has_children(include_hidden) {
                    rendered.lines.push(markup.open_dir(child));
                    rendered.absorb(render_nested(markup, entries, &child.path, include_hidden));
                    rendered.lines.push(markup.close_dir(last));
                } else {
                    rendered.lines.push(markup.empty_dir(child, last));
                }
            }
            EntryKind::File | EntryKind::Symlink => {
                rendered.files += 1;
                rendered.lines.push(markup.leaf(child, last));
            }
        }
    }

    rendered
}

struct Html;

impl Markup for Html {
    fn leaf(&self, entry: &Entry, _last: bool) -> String {
        format!("{}<br>", escape_html(&entry.name()))
    }

    fn empty_dir(&self, entry: &Entry, _last: bool) -> String {
        format!(
            "<details><summary>{}</summary></details>",
            escape_html(&entry.name())
        )
    }

    fn open_dir(&self, entry: &Entry) -> String {
        format!(
            "<details><summary>{}</summary><dd>",
            escape_html(&entry.name())
        )
    }

    fn close_dir(&self, _last: bool) -> String {
        "</dd></details>".to_owned()
    }
}

fn escape_html(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

struct Json;

impl Json {
    fn object_head(entry: &Entry) -> String {
        format!(
            "{{\"type\":\"{}\",\"name\":{}",
            entry.kind.as_str(),
            Value::String(entry.name().into_owned())
        )
    }
}

fn separator(last: bool) -> &'static str {
    if last { "" } else { "," }
}

impl Markup for Json {
    fn leaf(&self, entry: &Entry, last: bool) -> String {
        format!("{}}}{}", Json::object_head(entry), separator(last))
    }

    fn empty_dir(&self, entry: &Entry, last: bool) -> String {
        self.leaf(entry, last)
    }

    fn open_dir(&self, entry: &Entry) -> String {
        format!("{},\"contents\":[", Json::object_head(entry))
    }

    fn close_dir(&self, last: bool) -> String {
        format!("]}}{}", separator(last))
    }
}
