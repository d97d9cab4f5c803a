//! Human player reading row and column from a line-based terminal.

use super::Player;
use anyhow::{Result, bail};
use oxo_engine::{Board, Position, Side};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Human player prompting on `output` and reading answers from `input`.
///
/// Bad answers are reported and asked again; only a closed input stream
/// ends the turn with an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Asks who opens the game.
    pub fn ask_first_mover(&mut self) -> Result<Side> {
        ask_first_mover(&mut self.input, &mut self.output)
    }

    fn prompt_number(&mut self, prompt: &str, what: &str) -> Result<i64> {
        loop {
            let line = prompt_line(&mut self.input, &mut self.output, prompt)?;
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => {
                    debug!(input = %line.trim(), "Rejected non-numeric {}", what);
                    writeln!(self.output, "Error!: Input {} must be an integer", what)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Position> {
        loop {
            let row = self.prompt_number("Enter the row to move: ", "row")?;
            let col = self.prompt_number("Enter the column to move: ", "column")?;

            let pos = usize::try_from(row)
                .ok()
                .zip(usize::try_from(col).ok())
                .and_then(|(row, col)| Position::new(row, col));

            match pos {
                None => writeln!(
                    self.output,
                    "Error: Row and Column specified should be in range 0 to 2"
                )?,
                Some(pos) if !board.is_empty(pos) => {
                    writeln!(self.output, "Error: Position specified is already occupied")?
                }
                Some(pos) => {
                    debug!(%pos, "Human chose move");
                    return Ok(pos);
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Asks who opens: `u` for the user, `p` for the program.
#[instrument(skip_all)]
pub fn ask_first_mover<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Side> {
    loop {
        let answer = prompt_line(input, output, "Who moves first? (u : user, p : program): ")?;
        match answer.trim().to_lowercase().as_str() {
            "u" => return Ok(Side::Human),
            "p" => return Ok(Side::Computer),
            other => {
                warn!(answer = other, "Invalid first-mover answer");
                writeln!(output, "Error: Invalid Input (enter 'u' or 'p') ")?;
            }
        }
    }
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed");
    }
    Ok(line)
}
