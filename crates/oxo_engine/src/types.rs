//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// One of the two contestants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// The person at the keyboard, drawn as `X`.
    Human,
    /// The heuristic opponent, drawn as `O`.
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a side.
    Occupied(Side),
}

impl Cell {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`, so hypothetical placements are evaluated on a copy
/// (see [`Board::with`]) and the caller's board is never touched by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `side` placed at `pos`.
    pub fn with(&self, pos: Position, side: Side) -> Self {
        let mut probe = *self;
        probe.set(pos, Cell::Occupied(side));
        probe
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of cells occupied by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// The three cells of a row (0-2).
    pub fn row(&self, row: usize) -> [Cell; 3] {
        [0, 1, 2].map(|col| self.cells[row * 3 + col])
    }

    /// The three cells of a column (0-2).
    pub fn column(&self, col: usize) -> [Cell; 3] {
        [0, 1, 2].map(|row| self.cells[row * 3 + col])
    }

    /// The diagonal from top-left to bottom-right.
    pub fn main_diagonal(&self) -> [Cell; 3] {
        [self.cells[0], self.cells[4], self.cells[8]]
    }

    /// The diagonal from top-right to bottom-left.
    pub fn anti_diagonal(&self) -> [Cell; 3] {
        [self.cells[2], self.cells[4], self.cells[6]]
    }
}
