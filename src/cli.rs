//! Command-line interface.

use clap::Parser;
use noughts::{Difficulty, Theme};

/// Two-player tic-tac-toe for the terminal.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start in the dark theme.
    #[arg(long)]
    pub dark: bool,

    /// Preselect the difficulty shown in the settings line (cosmetic; no
    /// AI opponent consults it yet).
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Path of the log file tracing output is written to.
    #[arg(long, default_value = "noughts.log")]
    pub log_file: std::path::PathBuf,
}

impl Cli {
    /// Initial theme derived from the `--dark` flag.
    pub fn initial_theme(&self) -> Theme {
        if self.dark { Theme::Dark } else { Theme::Light }
    }
}
