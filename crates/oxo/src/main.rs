//! oxo - play tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use oxo::cli::{Cli, Command};
use oxo::{ComputerPlayer, GameConfig, HumanPlayer, Orchestrator, ask_first_mover};
use std::io;
use std::path::Path;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load(&cli.config)?;
    if let Some(first) = cli.command.first() {
        config = config.with_first_mover(first);
    }
    initialize_tracing(config.log_file())?;

    match cli.command {
        Command::Play { .. } => run_console(&config),
        Command::Tui { .. } => run_tui(&config),
    }
}

/// Runs a line-based game on stdin/stdout.
#[instrument(skip_all)]
fn run_console(config: &GameConfig) -> Result<()> {
    println!("Start Game");

    let mut human = HumanPlayer::new("User", io::stdin().lock(), io::stdout());
    let first = match config.first_mover().side() {
        Some(side) => side,
        None => human.ask_first_mover()?,
    };
    info!(%first, "First mover decided");

    let mut orchestrator = Orchestrator::new(
        first,
        Box::new(human),
        Box::new(ComputerPlayer::new("AI")),
        config.symbols(),
        io::stdout(),
    );
    let status = orchestrator.run()?;
    info!(?status, "Session finished");
    Ok(())
}

/// Runs the full-screen game, asking for the opener first if needed.
#[instrument(skip_all)]
fn run_tui(config: &GameConfig) -> Result<()> {
    let first = match config.first_mover().side() {
        Some(side) => side,
        None => ask_first_mover(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    oxo::tui::run_tui(first, config.symbols())
}

/// Sends tracing output to the log file so it doesn't interfere with the game.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,oxo_engine=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Tracing initialized");
    Ok(())
}

