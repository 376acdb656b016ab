//! First-class invariants for board positions.
//!
//! Invariants are logical properties a position must satisfy to be
//! reachable by alternating play. They are checked when a position is
//! built from arbitrary marks and asserted after every move in debug builds.

use crate::rules::holds_line;
use crate::{Board, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x_count = board.mark_count(Player::X);
        let o_count = board.mark_count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

/// Invariant: at most one player holds a complete line.
pub struct AtMostOneWinner;

impl Invariant<Board> for AtMostOneWinner {
    fn holds(board: &Board) -> bool {
        !(holds_line(board, Player::X) && holds_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a complete line"
    }
}

/// All position invariants as a composable set.
pub type PositionInvariants = (BalancedMarks, AtMostOneWinner);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_board_holds() {
        assert!(PositionInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_played_board_holds() {
        let mut board = Board::new();
        for cell in [Cell::Center, Cell::TopLeft, Cell::BottomRight] {
            board.play(cell).unwrap();
        }
        assert!(BalancedMarks::holds(&board));
        assert!(PositionInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_two_winners_violate() {
        let board = Board::from_squares_unchecked(
            "XXX\
             OOO\
             ...",
        );
        let violations = PositionInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, AtMostOneWinner::description());
    }

    #[test]
    fn test_too_many_o_marks_violate() {
        let board = Board::from_squares_unchecked("OO.X.....");
        assert!(!BalancedMarks::holds(&board));
    }
}
