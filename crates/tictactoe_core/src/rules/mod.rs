//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state; the match
//! state machine calls [`evaluate`] after every accepted move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};

use crate::{Board, Outcome};

/// Classifies a board as won, drawn, or still in progress.
///
/// Lines are checked in [`LINES`] order and the first complete one wins.
/// Total over every 9-square assignment, reachable or not.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
