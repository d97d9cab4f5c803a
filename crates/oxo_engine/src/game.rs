//! Turn-level game state.

use crate::error::MoveError;
use crate::rules::is_winning_line;
use crate::{Board, Cell, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Side),
    /// Board filled up with no winner.
    Tie,
}

/// One game of tic-tac-toe: the authoritative board and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Side,
    status: GameStatus,
    history: Vec<(Side, Position)>,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[(Side, Position)] {
        &self.history
    }

    /// Commits `side`'s move at `pos` and returns the resulting status.
    ///
    /// The win check only looks at the lines through `pos`, since a move can
    /// only complete a line it belongs to.
    ///
    /// # Errors
    ///
    /// Rejects moves after the game ended, out of turn, or onto an occupied cell.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(&mut self, side: Side, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if side != self.to_move {
            return Err(MoveError::WrongTurn(side));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Cell::Occupied(side));
        self.history.push((side, pos));

        if is_winning_line(&self.board, pos) {
            self.status = GameStatus::Won(side);
            info!(%side, %pos, "Game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Tie;
            info!("Game tied");
        } else {
            self.to_move = side.opponent();
        }
        Ok(self.status)
    }
}
