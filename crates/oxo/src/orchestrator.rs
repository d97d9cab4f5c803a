//! Console game orchestration between the human and the computer.

use crate::players::Player;
use crate::render::{Symbols, render_board};
use anyhow::Result;
use oxo_engine::{Game, GameStatus, Side};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game, alternating turns and printing the board after every move.
///
/// The orchestrator owns the authoritative [`Game`]; players only see the
/// board and answer with a position. It checks for a finished game before
/// every turn, so a player is never asked to move on a full board.
pub struct Orchestrator<W> {
    game: Game,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    symbols: Symbols,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator for a fresh game with `first` to move.
    pub fn new(
        first: Side,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        symbols: Symbols,
        out: W,
    ) -> Self {
        Self::from_game(Game::new(first), human, computer, symbols, out)
    }

    /// Creates an orchestrator that continues an existing game.
    pub fn from_game(
        game: Game,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        symbols: Symbols,
        out: W,
    ) -> Self {
        Self {
            game,
            human,
            computer,
            symbols,
            out,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, returning its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the game loop until someone wins or the board fills up.
    #[instrument(skip(self), fields(first = %self.game.to_move()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        writeln!(self.out, "\nInitial Board")?;
        self.print_board()?;

        loop {
            match self.game.status() {
                GameStatus::Won(Side::Human) => {
                    writeln!(self.out, "User has won!")?;
                    break;
                }
                GameStatus::Won(Side::Computer) => {
                    writeln!(self.out, "AI has won!")?;
                    break;
                }
                GameStatus::Tie => {
                    writeln!(self.out, "\nTie!")?;
                    break;
                }
                GameStatus::InProgress => {}
            }

            let side = self.game.to_move();
            let player = match side {
                Side::Human => {
                    writeln!(self.out, "\nUser's turn")?;
                    &mut self.human
                }
                Side::Computer => {
                    writeln!(self.out, "\nAI's turn")?;
                    &mut self.computer
                }
            };

            debug!(player = %player.name(), "Waiting for move");
            let pos = player.choose_move(self.game.board())?;
            self.game.place(side, pos)?;
            info!(%side, %pos, "Move made");
            self.print_board()?;
        }

        info!(status = ?self.game.status(), moves = self.game.history().len(), "Game over");
        Ok(self.game.status())
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", render_board(self.game.board(), &self.symbols))?;
        Ok(())
    }
}
