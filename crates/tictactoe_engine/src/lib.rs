//! Tic-tac-toe engine with a perfect-play computer opponent.
//!
//! # Architecture
//!
//! - **Board**: authoritative game state (marks and turn order), terminal-state detection
//! - **Rules**: pure win and draw checks over a board
//! - **Engine**: exhaustive minimax returning the optimal move for the player to move
//!
//! Presentation concerns (rendering, scores, game mode) live outside this crate.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Cell, DecisionEngine, Outcome};
//!
//! # fn example() -> Result<(), tictactoe_engine::GameError> {
//! let mut board = Board::new();
//! assert_eq!(board.play(Cell::Center)?, Outcome::Ongoing);
//!
//! let engine = DecisionEngine::new();
//! let reply = engine.best_move(&board)?;
//! board.play(reply)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod engine;
mod error;
mod invariants;
pub mod rules;
mod types;

pub use board::Board;
pub use cell::Cell;
pub use engine::{Analysis, DecisionEngine, SearchResult, SearchStats, WIN_SCORE};
pub use error::GameError;
pub use invariants::{
    AtMostOneWinner, BalancedMarks, Invariant, InvariantSet, InvariantViolation,
    PositionInvariants,
};
pub use types::{Outcome, Player, Square};
