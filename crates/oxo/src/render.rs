//! Plain-text board rendering for the console.

use oxo_engine::{Board, Cell, Side};

/// Marks drawn for each side; empty cells are blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    human: char,
    computer: char,
}

impl Symbols {
    /// Creates a symbol mapping.
    pub fn new(human: char, computer: char) -> Self {
        Self { human, computer }
    }

    /// Mark for a cell.
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => ' ',
            Cell::Occupied(Side::Human) => self.human,
            Cell::Occupied(Side::Computer) => self.computer,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

/// Formats the board as five lines: three rows of cells split by `|`,
/// with `-|-|-` between them.
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut result = String::new();
    for row in 0..3 {
        if row > 0 {
            result.push_str("-|-|-\n");
        }
        let cells = board.row(row).map(|cell| symbols.for_cell(cell).to_string());
        result.push_str(&cells.join("|"));
        result.push('\n');
    }
    result
}
