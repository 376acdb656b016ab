//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so the search and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, holds_line};

use crate::{Board, Outcome};

/// Derives the outcome of a position from its marks.
///
/// A line held by X is reported before a line held by O, and a win
/// takes precedence over a full board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::won_by(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
