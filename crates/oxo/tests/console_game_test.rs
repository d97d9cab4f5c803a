//! End-to-end console games driven by scripted input.

use anyhow::Result;
use oxo::{ComputerPlayer, HumanPlayer, Orchestrator, Player, Symbols};
use oxo_engine::{Board, Game, GameStatus, Position, Side};
use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

/// Collects everything the human prompts and the orchestrator print, in order.
#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A player that must never be asked for a move.
struct Unreachable;

impl Player for Unreachable {
    fn choose_move(&mut self, _board: &Board) -> Result<Position> {
        panic!("player asked to move on a finished game");
    }

    fn name(&self) -> &str {
        "unreachable"
    }
}

fn console_game(first: Side, script: &str) -> (GameStatus, Game, String) {
    let transcript = Transcript::default();
    let human = HumanPlayer::new(
        "User",
        Cursor::new(script.as_bytes().to_vec()),
        transcript.clone(),
    );
    let mut orchestrator = Orchestrator::new(
        first,
        Box::new(human),
        Box::new(ComputerPlayer::new("AI")),
        Symbols::default(),
        transcript.clone(),
    );
    let status = orchestrator.run().unwrap();
    (status, orchestrator.game().clone(), transcript.text())
}

#[test]
fn test_game_to_tie_with_input_errors() {
    let script = "a\n0\n0\n1\n1\n0\n1\n3\n0\n2\n0\n1\n2\n2\n2\n";
    let (status, game, text) = console_game(Side::Human, script);

    assert_eq!(status, GameStatus::Tie);
    assert!(game.board().is_full());
    assert!(text.starts_with("\nInitial Board\n\n | | \n"));
    assert!(text.contains("Error!: Input row must be an integer"));
    assert!(text.contains("Error: Position specified is already occupied"));
    assert!(text.contains("Error: Row and Column specified should be in range 0 to 2"));
    assert!(text.ends_with("\nTie!\n"));

    // Computer replies: center, block (0,2), block (1,0), then (2,1).
    let computer_moves: Vec<_> = game
        .history()
        .iter()
        .filter(|(side, _)| *side == Side::Computer)
        .map(|(_, pos)| *pos)
        .collect();
    assert_eq!(
        computer_moves,
        vec![
            Position::CENTER,
            Position::TOP_RIGHT,
            Position::MIDDLE_LEFT,
            Position::BOTTOM_CENTER,
        ]
    );
    assert_eq!(text.matches("AI's turn").count(), 4);
    assert_eq!(text.matches("User's turn").count(), 5);
}

#[test]
fn test_computer_opens_and_wins() {
    let (status, game, text) = console_game(Side::Computer, "0\n1\n2\n2\n");

    assert_eq!(status, GameStatus::Won(Side::Computer));
    assert_eq!(game.history()[0], (Side::Computer, Position::CENTER));
    assert_eq!(game.history()[2], (Side::Computer, Position::BOTTOM_LEFT));
    assert!(text.ends_with(" |X|O\n-|-|-\n |O| \n-|-|-\nO| |X\nAI has won!\n"));
}

#[test]
fn test_finished_board_reports_tie_without_asking_players() {
    let mut game = Game::new(Side::Human);
    for pos in [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::CENTER,
        Position::MIDDLE_LEFT,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_RIGHT,
    ] {
        game.place(game.to_move(), pos).unwrap();
    }

    let mut orchestrator = Orchestrator::from_game(
        game,
        Box::new(Unreachable),
        Box::new(Unreachable),
        Symbols::default(),
        Vec::new(),
    );
    assert_eq!(orchestrator.run().unwrap(), GameStatus::Tie);
    let text = String::from_utf8(orchestrator.into_output()).unwrap();
    assert!(text.contains("Tie!"));
    assert!(!text.contains("turn"));
}

#[test]
fn test_closed_input_ends_session_with_error() {
    let mut orchestrator = Orchestrator::new(
        Side::Human,
        Box::new(HumanPlayer::new("User", Cursor::new(Vec::new()), Vec::new())),
        Box::new(ComputerPlayer::new("AI")),
        Symbols::default(),
        Vec::new(),
    );
    assert!(orchestrator.run().is_err());
    assert!(orchestrator.game().history().is_empty());
}
