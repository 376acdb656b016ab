//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate;
    use crate::{Cell, Outcome};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_marks(&[Cell::Center], &[]).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_marks(
            &[
                Cell::TopLeft,
                Cell::TopRight,
                Cell::Center,
                Cell::MiddleRight,
                Cell::BottomCenter,
            ],
            &[
                Cell::TopCenter,
                Cell::MiddleLeft,
                Cell::BottomLeft,
                Cell::BottomRight,
            ],
        )
        .unwrap();

        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        // X X X / O O X / X O O: full, but X holds the top row
        let board = Board::from_marks(
            &[
                Cell::TopLeft,
                Cell::TopCenter,
                Cell::TopRight,
                Cell::MiddleRight,
                Cell::BottomLeft,
            ],
            &[
                Cell::MiddleLeft,
                Cell::Center,
                Cell::BottomCenter,
                Cell::BottomRight,
            ],
        )
        .unwrap();

        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::FirstWins);
    }
}
