//! oxo - terminal tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Engine**: board model and move selection live in [`oxo_engine`]
//! - **Players**: [`HumanPlayer`] reads row/column prompts, [`ComputerPlayer`]
//!   asks the engine
//! - **Orchestrator**: [`Orchestrator`] owns the game and alternates turns
//! - **TUI**: full-screen front end in [`tui`]
//! - **Config**: [`GameConfig`] from an optional TOML file

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
mod players;
mod render;
pub mod tui;

pub use config::{ConfigError, FirstMover, GameConfig};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player, ask_first_mover};
pub use render::{Symbols, render_board};
