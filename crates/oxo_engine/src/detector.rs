//! Immediate-win and threat detection.
//!
//! Each scan walks the empty cells in row-major order and tries the side on a
//! copy of the board, so the first hit in that order wins ties and the
//! caller's board is left as it was.

use crate::rules::is_winning_line;
use crate::{Board, Position, Side};
use tracing::instrument;

/// Finds the first empty cell (row-major) that completes a line for `side`.
#[instrument(level = "trace", skip(board))]
pub fn find_immediate_win(board: &Board, side: Side) -> Option<Position> {
    board
        .empty_positions()
        .find(|&pos| wins_at(board, pos, side))
}

/// Counts every empty cell that would complete a line for `side`.
#[instrument(level = "trace", skip(board))]
pub fn count_winning_cells(board: &Board, side: Side) -> usize {
    board
        .empty_positions()
        .filter(|&pos| wins_at(board, pos, side))
        .count()
}

/// Finds the cell `attacking` has to take to stop its opponent winning next move.
pub fn find_must_defend(board: &Board, attacking: Side) -> Option<Position> {
    find_immediate_win(board, attacking.opponent())
}

fn wins_at(board: &Board, pos: Position, side: Side) -> bool {
    is_winning_line(&board.with(pos, side), pos)
}
