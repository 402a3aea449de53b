use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fstree")]
#[command(about = "Render a directory tree as text, HTML, or JSON", long_about = None)]
pub struct Cli {
    /// Root directory to render (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Include hidden files and directories
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}
