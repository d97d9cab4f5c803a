//! Move selection for the computer side.
//!
//! The policy runs in strict priority order:
//!
//! 1. take a cell that wins immediately,
//! 2. otherwise block the human's immediate win,
//! 3. otherwise score every empty cell and pick the lowest risk, breaking
//!    ties by highest attack and then by row-major order.

use crate::detector::{find_immediate_win, find_must_defend};
use crate::error::EngineError;
use crate::rules::winner;
use crate::scorer::{attack_score, risk_score};
use crate::{Board, Position, Side};
use serde::Serialize;
use tracing::{debug, instrument};

/// A scored empty cell, evaluated with the computer placed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The cell under consideration.
    pub position: Position,
    /// Fork exposure after the human's forced reply; lower is better.
    pub risk: usize,
    /// Open lines through the cell; higher is better.
    pub attack: usize,
}

/// Why the engine picked its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Decision {
    /// The move completes a line for the computer.
    #[display("win at {}", _0)]
    Win(Position),
    /// The move blocks the human's immediate win.
    #[display("block at {}", _0)]
    Block(Position),
    /// Best candidate by risk, then attack.
    #[display("heuristic pick {} (risk {}, attack {})", _0.position, _0.risk, _0.attack)]
    Heuristic(Candidate),
}

impl Decision {
    /// The chosen cell.
    pub fn position(&self) -> Position {
        match self {
            Decision::Win(pos) | Decision::Block(pos) => *pos,
            Decision::Heuristic(candidate) => candidate.position,
        }
    }
}

/// The computer's move-selection engine.
///
/// Stateless; holding one is how a player or turn driver depends on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector;

impl MoveSelector {
    /// Creates a new selector.
    pub fn new() -> Self {
        Self
    }

    /// Picks the computer's next cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BoardFull`] or [`EngineError::AlreadyDecided`]
    /// when called on a finished game.
    #[instrument(skip(self, board))]
    pub fn choose_move(&self, board: &Board) -> Result<Position, EngineError> {
        self.decide(board).map(|decision| decision.position())
    }

    /// Like [`choose_move`](Self::choose_move), but reports which rule fired.
    #[instrument(skip(self, board))]
    pub fn decide(&self, board: &Board) -> Result<Decision, EngineError> {
        if let Some(side) = winner(board) {
            return Err(EngineError::AlreadyDecided(side));
        }
        if board.is_full() {
            return Err(EngineError::BoardFull);
        }

        let decision = if let Some(pos) = find_immediate_win(board, Side::Computer) {
            Decision::Win(pos)
        } else if let Some(pos) = find_must_defend(board, Side::Computer) {
            Decision::Block(pos)
        } else {
            Decision::Heuristic(self.best_candidate(board)?)
        };

        debug!(%decision, "Computer move decided");
        Ok(decision)
    }

    /// Scores every empty cell with the computer placed on it.
    pub fn candidates(&self, board: &Board) -> Vec<Candidate> {
        board
            .empty_positions()
            .map(|position| {
                let probe = board.with(position, Side::Computer);
                Candidate {
                    position,
                    risk: risk_score(&probe),
                    attack: attack_score(&probe, position),
                }
            })
            .collect()
    }

    fn best_candidate(&self, board: &Board) -> Result<Candidate, EngineError> {
        let candidates = self.candidates(board);
        debug!(?candidates, "Heuristic candidates scored");

        // min_by keeps the first of equal elements, which is the row-major one.
        candidates
            .into_iter()
            .min_by(|a, b| a.risk.cmp(&b.risk).then(b.attack.cmp(&a.attack)))
            .ok_or(EngineError::BoardFull)
    }
}
