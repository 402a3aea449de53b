mod enumerate;
mod structured;
mod text;

pub use enumerate::{enumerate, enumerate_dir, spawn_enumerate};
pub use structured::{render_html, render_json};
pub use text::render_text;
