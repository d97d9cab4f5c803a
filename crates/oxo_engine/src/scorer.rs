//! Heuristic scoring of candidate cells.
//!
//! Attack measures how many lines through a cell are still open to the
//! computer. Risk measures whether the position a candidate leaves behind
//! hands the human a fork.

use crate::detector::{count_winning_cells, find_must_defend};
use crate::{Board, Cell, Position, Side};
use tracing::{instrument, trace};

/// Risk assigned when the probed board forces no reply from the human.
///
/// Sits above any fork count a real board can produce, so candidates that
/// leave the human a free move rank behind forcing ones.
pub const NO_FORCED_REPLY_RISK: usize = 10;

/// A forced reply that leaves the human more winning cells than this is a fork.
pub const FORK_THRESHOLD: usize = 1;

/// 1 if the computer could still complete `line` (no human piece on it), else 0.
pub fn line_offense(line: [Cell; 3]) -> usize {
    usize::from(!line.contains(&Cell::Occupied(Side::Human)))
}

/// Offense contributed by the diagonal(s) through `pos`.
///
/// Edge cells score 0, corners score their single diagonal, and the center
/// scores both.
pub fn diagonal_offense(board: &Board, pos: Position) -> usize {
    if !pos.is_diagonal_member() {
        return 0;
    }
    let main = if pos.on_main_diagonal() {
        line_offense(board.main_diagonal())
    } else {
        0
    };
    let anti = if pos.on_anti_diagonal() {
        line_offense(board.anti_diagonal())
    } else {
        0
    };
    main + anti
}

/// Row, column and diagonal offense through `pos`. Higher is better for the computer.
#[instrument(level = "trace", skip(board))]
pub fn attack_score(board: &Board, pos: Position) -> usize {
    line_offense(board.row(pos.row())) + line_offense(board.column(pos.col()))
        + diagonal_offense(board, pos)
}

/// How exposed the computer is after the human's forced reply. Lower is better.
///
/// If the computer threatens a line on `board`, the human has to block it;
/// the risk is the number of winning cells that block hands the human when it
/// is a fork, and 0 otherwise. Without a threat to answer the human moves
/// freely and the risk is [`NO_FORCED_REPLY_RISK`].
#[instrument(level = "trace", skip(board))]
pub fn risk_score(board: &Board) -> usize {
    let Some(reply) = find_must_defend(board, Side::Human) else {
        return NO_FORCED_REPLY_RISK;
    };
    let after_reply = board.with(reply, Side::Human);
    let wins = count_winning_cells(&after_reply, Side::Human);
    trace!(%reply, wins, "forced reply probed");
    if wins > FORK_THRESHOLD { wins } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_offense() {
        let h = Cell::Occupied(Side::Human);
        let c = Cell::Occupied(Side::Computer);
        assert_eq!(line_offense([Cell::Empty; 3]), 1);
        assert_eq!(line_offense([c, Cell::Empty, c]), 1);
        assert_eq!(line_offense([c, h, Cell::Empty]), 0);
    }

    #[test]
    fn test_attack_on_empty_board() {
        let board = Board::new();
        assert_eq!(attack_score(&board, Position::CENTER), 4);
        assert_eq!(attack_score(&board, Position::TOP_LEFT), 3);
        assert_eq!(attack_score(&board, Position::BOTTOM_RIGHT), 3);
        assert_eq!(attack_score(&board, Position::TOP_CENTER), 2);
        assert_eq!(attack_score(&board, Position::MIDDLE_RIGHT), 2);
    }

    #[test]
    fn test_human_piece_closes_lines() {
        let mut board = Board::new();
        board.set(Position::TOP_RIGHT, Cell::Occupied(Side::Human));
        // Center loses the anti-diagonal only.
        assert_eq!(diagonal_offense(&board, Position::CENTER), 1);
        // Top-left loses row 0; its own diagonal is still open.
        assert_eq!(attack_score(&board, Position::TOP_LEFT), 2);
        assert_eq!(diagonal_offense(&board, Position::BOTTOM_LEFT), 0);
    }

    #[test]
    fn test_no_forced_reply_is_high_risk() {
        assert_eq!(risk_score(&Board::new()), NO_FORCED_REPLY_RISK);
    }

    #[test]
    fn test_forced_reply_without_fork() {
        // O O . / . X . / . . .  -> human blocks (0,2) and then threatens (2,0) only.
        let mut board = Board::new();
        board.set(Position::TOP_LEFT, Cell::Occupied(Side::Computer));
        board.set(Position::TOP_CENTER, Cell::Occupied(Side::Computer));
        board.set(Position::CENTER, Cell::Occupied(Side::Human));
        assert_eq!(risk_score(&board), 0);
    }

    #[test]
    fn test_forced_reply_into_fork() {
        // O O . / . . X / X . .  -> human blocks (0,2), then wins at (1,1) or (2,2).
        let mut board = Board::new();
        board.set(Position::TOP_LEFT, Cell::Occupied(Side::Computer));
        board.set(Position::TOP_CENTER, Cell::Occupied(Side::Computer));
        board.set(Position::MIDDLE_RIGHT, Cell::Occupied(Side::Human));
        board.set(Position::BOTTOM_LEFT, Cell::Occupied(Side::Human));
        assert_eq!(risk_score(&board), 2);
    }

    #[test]
    fn test_scoring_leaves_board_unchanged() {
        let mut board = Board::new();
        board.set(Position::TOP_LEFT, Cell::Occupied(Side::Computer));
        board.set(Position::CENTER, Cell::Occupied(Side::Human));
        let before = board;
        let first = (risk_score(&board), attack_score(&board, Position::TOP_RIGHT));
        let second = (risk_score(&board), attack_score(&board, Position::TOP_RIGHT));
        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}
