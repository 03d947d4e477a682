//! Terminal tic-tac-toe: two players sharing one keyboard, with a theme
//! toggle and a cosmetic difficulty selector.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to a file: the TUI owns the terminal, so tracing output must
    // never reach stdout.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(
        theme = cli.initial_theme().label(),
        difficulty = cli.difficulty.unwrap_or_default().label(),
        "starting noughts"
    );

    tui::run(cli.initial_theme(), cli.difficulty.unwrap_or_default())
}
