//! Board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate on the board: row and column, each in `0..=2`.
///
/// Positions can only be built through [`Position::new`] or the named
/// constants, so an out-of-range coordinate never reaches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Top-left (0, 0)
    pub const TOP_LEFT: Self = Self { row: 0, col: 0 };
    /// Top-center (0, 1)
    pub const TOP_CENTER: Self = Self { row: 0, col: 1 };
    /// Top-right (0, 2)
    pub const TOP_RIGHT: Self = Self { row: 0, col: 2 };
    /// Middle-left (1, 0)
    pub const MIDDLE_LEFT: Self = Self { row: 1, col: 0 };
    /// Center (1, 1)
    pub const CENTER: Self = Self { row: 1, col: 1 };
    /// Middle-right (1, 2)
    pub const MIDDLE_RIGHT: Self = Self { row: 1, col: 2 };
    /// Bottom-left (2, 0)
    pub const BOTTOM_LEFT: Self = Self { row: 2, col: 0 };
    /// Bottom-center (2, 1)
    pub const BOTTOM_CENTER: Self = Self { row: 2, col: 1 };
    /// Bottom-right (2, 2)
    pub const BOTTOM_RIGHT: Self = Self { row: 2, col: 2 };

    /// All 9 positions in row-major order.
    ///
    /// Every scan in the engine walks this array, which makes row-major order
    /// the tie-break between equally good cells.
    pub const ALL: [Position; 9] = [
        Self::TOP_LEFT,
        Self::TOP_CENTER,
        Self::TOP_RIGHT,
        Self::MIDDLE_LEFT,
        Self::CENTER,
        Self::MIDDLE_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_CENTER,
        Self::BOTTOM_RIGHT,
    ];

    /// Creates a position, or `None` if either coordinate is outside `0..=2`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Whether the cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Whether the cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == 2
    }

    /// Corners and the center: the five cells a diagonal passes through.
    pub fn is_diagonal_member(self) -> bool {
        self.on_main_diagonal() || self.on_anti_diagonal()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.to_index()]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
