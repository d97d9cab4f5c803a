//! Tic-tac-toe board model and the heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Side`], [`Position`]
//! - **Rules**: line completion and tie checks in [`rules`]
//! - **Detector**: immediate wins and threats in [`detector`]
//! - **Scorer**: risk and attack heuristics in [`scorer`]
//! - **Selector**: [`MoveSelector`], the win > block > heuristic policy
//! - **Game**: [`Game`], the authoritative board plus turn order
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Cell, MoveSelector, Position, Side};
//!
//! let mut board = Board::new();
//! board.set(Position::TOP_LEFT, Cell::Occupied(Side::Human));
//! board.set(Position::TOP_CENTER, Cell::Occupied(Side::Human));
//!
//! let pos = MoveSelector::new().choose_move(&board).unwrap();
//! assert_eq!(pos, Position::TOP_RIGHT);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod detector;
mod error;
mod game;
mod position;
pub mod rules;
pub mod scorer;
mod selector;
mod types;

pub use error::{EngineError, MoveError};
pub use game::{Game, GameStatus};
pub use position::Position;
pub use selector::{Candidate, Decision, MoveSelector};
pub use types::{Board, Cell, Side};
