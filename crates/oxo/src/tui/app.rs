//! Application state and logic for the full-screen game.

use super::input::move_cursor;
use crate::players::{ComputerPlayer, Player};
use crate::render::Symbols;
use anyhow::Result;
use crossterm::event::KeyCode;
use oxo_engine::{Game, GameStatus, Position, Side};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    game: Game,
    first: Side,
    computer: ComputerPlayer,
    symbols: Symbols,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application; the computer moves at once if it opens.
    pub fn new(first: Side, symbols: Symbols) -> Result<Self> {
        let mut app = Self {
            game: Game::new(first),
            first,
            computer: ComputerPlayer::new("AI"),
            symbols,
            cursor: Position::CENTER,
            status_message: String::new(),
            should_quit: false,
        };
        app.start()?;
        Ok(app)
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the board marks.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart()?,
            KeyCode::Enter | KeyCode::Char(' ') => self.play_human(self.cursor)?,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.play_human(pos)?;
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Ok(())
    }

    /// Restarts the game with the same opener.
    pub fn restart(&mut self) -> Result<()> {
        debug!("Restarting game");
        self.game = Game::new(self.first);
        self.cursor = Position::CENTER;
        self.start()
    }

    fn start(&mut self) -> Result<()> {
        if self.game.to_move() == Side::Computer {
            self.play_computer()?;
        } else {
            self.status_message = "Your move. Arrows to aim, Enter to place.".to_string();
        }
        Ok(())
    }

    fn play_human(&mut self, pos: Position) -> Result<()> {
        if self.game.is_over() {
            self.status_message = "Game over. Press 'r' to restart or 'q' to quit.".to_string();
            return Ok(());
        }
        if !self.game.board().is_empty(pos) {
            self.status_message = format!("{} is already taken", pos.label());
            return Ok(());
        }

        self.game.place(Side::Human, pos)?;
        if self.announce_result() {
            return Ok(());
        }
        self.play_computer()
    }

    fn play_computer(&mut self) -> Result<()> {
        let pos = self.computer.choose_move(self.game.board())?;
        self.game.place(Side::Computer, pos)?;
        if !self.announce_result() {
            self.status_message = format!("{} played {}. Your move.", self.computer.name(), pos.label());
        }
        Ok(())
    }

    /// Sets the end-of-game message; returns whether the game is over.
    fn announce_result(&mut self) -> bool {
        let message = match self.game.status() {
            GameStatus::InProgress => return false,
            GameStatus::Won(Side::Human) => "You win!",
            GameStatus::Won(Side::Computer) => "AI wins!",
            GameStatus::Tie => "Tie!",
        };
        self.status_message = format!("{} Press 'r' to restart or 'q' to quit.", message);
        true
    }
}
