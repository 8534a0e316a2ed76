//! Command-line interface for strictly_tictactoe.

use clap::Parser;
use std::path::PathBuf;
use strictly_tictactoe::{ConfigError, GameSettings};
use tracing::instrument;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep previous output instead of clearing the screen between moves
    #[arg(long)]
    pub no_clear: bool,

    /// Color the marks on the board
    #[arg(long)]
    pub color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolves settings: file values first, then flag overrides.
    #[instrument(skip(self))]
    pub fn settings(&self) -> Result<GameSettings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => GameSettings::from_file(path)?,
            None => GameSettings::new(),
        };
        if self.no_clear {
            settings = settings.with_clear_screen(false);
        }
        if self.color {
            settings = settings.with_color(true);
        }
        Ok(settings)
    }
}
