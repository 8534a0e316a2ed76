//! Strictly Tic-Tac-Toe - console entry point
//!
//! Reads moves from stdin and renders the board to stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::sync::Mutex;
use strictly_tictactoe::GameLoop;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_file.as_deref())?;

    let settings = cli.settings()?;
    info!(?settings, "Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = GameLoop::new(stdin.lock(), stdout.lock(), settings);
    let winner = game.run().context("Game ended without a winner")?;

    info!(%winner, "Game over");
    Ok(())
}

/// Logs go to stderr or a file so they never interleave with the board.
#[instrument]
fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    info!("Tracing initialized");
    Ok(())
}
