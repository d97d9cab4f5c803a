//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The win check is the
//! primitive every threat probe and the turn driver build on.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{is_winning_line, winner};
