//! Command-line interface for oxo.

use crate::config::FirstMover;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// oxo - tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, global = true, default_value = "oxo.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play with line-based prompts for row and column
    Play {
        /// Who opens the game (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstMover>,
    },

    /// Play in a full-screen terminal UI with cursor keys
    Tui {
        /// Who opens the game (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstMover>,
    },
}

impl Command {
    /// The first-mover override, if given.
    pub fn first(&self) -> Option<FirstMover> {
        match self {
            Command::Play { first } | Command::Tui { first } => *first,
        }
    }
}
