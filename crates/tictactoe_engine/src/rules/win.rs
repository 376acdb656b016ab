//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Square};

/// The eight winning triples: three rows, three columns, two diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns true if `player` holds all three cells of any line.
pub fn holds_line(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.get(cell) == mark))
}

/// Checks if there is a winner on the board.
///
/// X is checked across every line before O, so a board where both
/// players hold a line (unreachable under alternating play) reports X.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| holds_line(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_marks(
            &[Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
            &[Cell::Center, Cell::BottomLeft],
        )
        .unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::from_marks(
            &[Cell::TopCenter, Cell::MiddleLeft, Cell::BottomCenter],
            &[Cell::TopLeft, Cell::Center, Cell::BottomRight],
        )
        .unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_marks(&[Cell::TopLeft, Cell::TopCenter], &[Cell::Center]).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for cell in Cell::ALL {
            assert!(LINES.iter().any(|line| line.contains(&cell)));
        }
    }
}
