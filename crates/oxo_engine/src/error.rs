//! Error types for the engine and the game model.

use crate::{Position, Side};

/// Precondition failure when asking the engine for a move.
///
/// The turn driver checks for a finished game before every computer turn, so
/// seeing one of these means the caller broke that contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// No empty cell is left to choose.
    #[display("Board is full, no move to choose")]
    BoardFull,

    /// A line is already complete.
    #[display("Game already decided: {} holds a completed line", _0)]
    AlreadyDecided(Side),
}

impl std::error::Error for EngineError {}

/// Error that can occur when committing a move to a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Position {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Side),
}

impl std::error::Error for MoveError {}
