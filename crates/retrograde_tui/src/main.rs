//! Retrograde - tic-tac-toe in the terminal with a navigable move history.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use retrograde_core::SortOrder;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe and rewind any move.
#[derive(Parser, Debug)]
#[command(name = "retrograde")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
struct Cli {
    /// Log file path (the alternate screen owns stdout)
    #[arg(long, default_value = "retrograde.log")]
    log_file: std::path::PathBuf,

    /// Show the move history newest-first
    #[arg(long)]
    descending: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file to avoid interfering with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting retrograde");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let sort_order = if cli.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let res = app::App::new(sort_order).run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {err:?}");
    }

    res
}
