use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use slate::services::tracing_setup;
use slate::view::terminal::{run_repl, TerminalView};
use slate::{DirectoryContext, Editor, RecentList};
use std::path::PathBuf;

/// A small multi-document text editor
#[derive(Parser, Debug)]
#[command(name = "slate")]
#[command(about = "A multi-document text editor with a recent-files list", long_about = None)]
#[command(version)]
struct Args {
    /// Files to open, each in its own tab
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Directory for persistent state (default: the platform data directory)
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: <data dir>/logs/slate.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Where to keep the recent-files list (default: <data dir>/recent.json)
    #[arg(long, value_name = "PATH")]
    recent_file: Option<PathBuf>,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let dir_context = match &args.data_dir {
        Some(dir) => DirectoryContext::with_data_dir(dir.clone()),
        None => DirectoryContext::from_system().context("Failed to locate data directory")?,
    };

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| dir_context.log_path());
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled ({}): {}", log_file.display(), e);
    }
    tracing::info!("Editor starting");

    let recent = match &args.recent_file {
        Some(path) => RecentList::new(path.clone()),
        None => RecentList::from_context(&dir_context),
    };

    let mut editor = Editor::new(TerminalView::stdio(), recent);

    for file in &args.files {
        if let Err(e) = editor.open_path(file) {
            tracing::error!("Failed to open {:?}: {:#}", file, e);
            eprintln!("Error: {}: {:#}", file.display(), e);
        }
    }

    run_repl(&mut editor);
    tracing::info!("Editor exiting");
    Ok(())
}
