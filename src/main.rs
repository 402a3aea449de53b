mod cli;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cli::{Cli, Format};
use fstree::RealFileSystem;

#[tokio::main]
async fn main() -> ExitCode {
    fstree::logging::init_logging();
    let cli = Cli::parse();

    let (root_path, is_current_dir) = match cli.path.as_ref() {
        None => (PathBuf::from("."), true),
        Some(raw) => (raw.clone(), raw.as_path() == Path::new(".")),
    };

    match run(&cli, &root_path, is_current_dir).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fstree: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli, root_path: &Path, is_current_dir: bool) -> Result<()> {
    let metadata = std::fs::symlink_metadata(root_path)
        .with_context(|| format!("{}", root_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !metadata.is_dir() {
        let file_name = fstree::root_display_name(root_path, false);
        writeln!(out, "{file_name}")?;
        return Ok(());
    }

    debug!(root = %root_path.display(), format = ?cli.format, "rendering");
    match cli.format {
        Format::Text => {
            let rendered = fstree::render_text(&RealFileSystem, root_path, "", cli.all)?;
            writeln!(
                out,
                "{}",
                fstree::root_display_name(root_path, is_current_dir)
            )?;
            for line in &rendered.lines {
                writeln!(out, "{line}")?;
            }
            writeln!(
                out,
                "\n{} {}, {} {}",
                rendered.directories,
                plural(rendered.directories, "directory", "directories"),
                rendered.files,
                plural(rendered.files, "file", "files"),
            )?;
        }
        Format::Html => {
            let entries = fstree::spawn_enumerate(root_path.to_path_buf(), cli.all).await??;
            let rendered = fstree::render_html(&entries, root_path, cli.all);
            writeln!(out, "{}", rendered.lines.concat())?;
        }
        Format::Json => {
            let entries = fstree::spawn_enumerate(root_path.to_path_buf(), cli.all).await??;
            let rendered = fstree::render_json(&entries, root_path, cli.all);
            writeln!(out, "[{}]", rendered.lines.concat())?;
        }
    }

    Ok(())
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
