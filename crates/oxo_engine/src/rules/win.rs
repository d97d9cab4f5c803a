//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Position, Side};
use tracing::instrument;

/// Checks whether the cell at `pos` completes a line for its occupant.
///
/// Looks at the row and the column through `pos`, and at the diagonal(s)
/// only when `pos` is a corner or the center. An empty cell never wins.
#[instrument(level = "trace", skip(board))]
pub fn is_winning_line(board: &Board, pos: Position) -> bool {
    let Cell::Occupied(side) = board.get(pos) else {
        return false;
    };
    let owned = |line: [Cell; 3]| line.iter().all(|c| *c == Cell::Occupied(side));

    if owned(board.row(pos.row())) || owned(board.column(pos.col())) {
        return true;
    }
    if !pos.is_diagonal_member() {
        return false;
    }
    (pos.on_main_diagonal() && owned(board.main_diagonal()))
        || (pos.on_anti_diagonal() && owned(board.anti_diagonal()))
}

/// Returns the side holding any completed line, if one exists.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Side> {
    Position::ALL
        .into_iter()
        .find(|&pos| is_winning_line(board, pos))
        .and_then(|pos| board.get(pos).side())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, side: Side, positions: &[Position]) {
        for &pos in positions {
            board.set(pos, Cell::Occupied(side));
        }
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|&p| !is_winning_line(&board, p)));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_top_row() {
        let mut board = Board::new();
        place(
            &mut board,
            Side::Human,
            &[Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
        );
        assert!(is_winning_line(&board, Position::TOP_CENTER));
        assert!(!is_winning_line(&board, Position::CENTER));
        assert_eq!(winner(&board), Some(Side::Human));
    }

    #[test]
    fn test_column() {
        let mut board = Board::new();
        place(
            &mut board,
            Side::Computer,
            &[Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
        );
        assert!(is_winning_line(&board, Position::MIDDLE_RIGHT));
        assert_eq!(winner(&board), Some(Side::Computer));
    }

    #[test]
    fn test_anti_diagonal_through_corner() {
        let mut board = Board::new();
        place(
            &mut board,
            Side::Computer,
            &[Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
        );
        assert!(is_winning_line(&board, Position::BOTTOM_LEFT));
        assert!(is_winning_line(&board, Position::CENTER));
    }

    #[test]
    fn test_corner_ignores_the_other_diagonal() {
        // Anti-diagonal is complete, but top-left only sits on the main one.
        let mut board = Board::new();
        place(
            &mut board,
            Side::Human,
            &[Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
        );
        board.set(Position::TOP_LEFT, Cell::Occupied(Side::Human));
        assert!(!is_winning_line(&board, Position::TOP_LEFT));
        assert!(is_winning_line(&board, Position::BOTTOM_LEFT));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, Side::Human, &[Position::TOP_LEFT, Position::TOP_CENTER]);
        place(&mut board, Side::Computer, &[Position::TOP_RIGHT]);
        assert!(!is_winning_line(&board, Position::TOP_RIGHT));
        assert_eq!(winner(&board), None);
    }
}
