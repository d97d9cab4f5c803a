//! The heuristic computer opponent.

use super::Player;
use anyhow::Result;
use oxo_engine::{Board, MoveSelector, Position};
use tracing::{debug, instrument};

/// Computer player backed by the move selector.
pub struct ComputerPlayer {
    name: String,
    selector: MoveSelector,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selector: MoveSelector::new(),
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        let decision = self.selector.decide(board)?;
        debug!(%decision, "Computer chose move");
        Ok(decision.position())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxo_engine::{Cell, Side};

    #[test]
    fn test_blocks_like_the_engine() {
        let mut board = Board::new();
        board.set(Position::TOP_LEFT, Cell::Occupied(Side::Human));
        board.set(Position::TOP_CENTER, Cell::Occupied(Side::Human));
        let mut ai = ComputerPlayer::new("AI");
        assert_eq!(ai.choose_move(&board).unwrap(), Position::TOP_RIGHT);
        assert_eq!(ai.name(), "AI");
    }

    #[test]
    fn test_full_board_is_an_error() {
        use Side::{Computer as O, Human as X};
        let mut board = Board::new();
        for (pos, side) in Position::ALL.into_iter().zip([X, O, X, O, X, X, O, X, O]) {
            board.set(pos, Cell::Occupied(side));
        }
        assert!(ComputerPlayer::new("AI").choose_move(&board).is_err());
    }
}
