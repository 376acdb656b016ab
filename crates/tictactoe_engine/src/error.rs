//! Error types for board and engine operations.

use crate::Cell;

/// Error raised when a move, a position, or a search request is invalid.
///
/// None of these are fatal: the caller decides whether to re-prompt,
/// ignore the input, or surface the message.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell already holds a mark. The board is left unchanged.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Cell),

    /// A cell number outside 1-9.
    #[display("Cell {} is out of range (must be 1-9)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The board is already decided, so there is nothing to search.
    #[display("No legal moves: the game is already over")]
    NoLegalMoves,

    /// A position that cannot arise from alternating play.
    #[display("Inconsistent position: {}", _0)]
    InconsistentPosition(#[error(not(source))] String),

    /// A cell or board could not be parsed from text.
    #[display("Parse error: {}", _0)]
    Parse(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_errors_have_no_source() {
        let errors = [
            GameError::CellOccupied(Cell::Center),
            GameError::OutOfRange(0),
            GameError::NoLegalMoves,
            GameError::Parse("'z' is not a cell".to_string()),
        ];
        for err in errors {
            assert!(err.source().is_none());
        }
    }

    #[test]
    fn test_boxes_as_std_error() {
        let boxed: Box<dyn Error> = Box::new(GameError::CellOccupied(Cell::TopLeft));
        assert_eq!(boxed.to_string(), "Cell 1 is already occupied");
    }
}
