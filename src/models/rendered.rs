/// Output of a renderer: the emitted lines or fragments plus subtree totals.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Rendered {
    pub lines: Vec<String>,
    pub directories: usize,
    pub files: usize,
}

impl Rendered {
    pub fn total(&self) -> usize {
        self.directories + self.files
    }

    /// Appends a nested render, folding its totals into ours.
    pub(crate) fn absorb(&mut self, nested: Rendered) {
        self.lines.extend(nested.lines);
        self.directories += nested.directories;
        self.files += nested.files;
    }
}
