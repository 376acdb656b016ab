//! Tests for cell numbering and parsing.

use tictactoe_engine::{Board, Cell, GameError};

#[test]
fn test_cell_to_index() {
    assert_eq!(Cell::TopLeft.index(), 1);
    assert_eq!(Cell::Center.index(), 5);
    assert_eq!(Cell::BottomRight.index(), 9);
}

#[test]
fn test_cell_from_index() {
    assert_eq!(Cell::from_index(1), Ok(Cell::TopLeft));
    assert_eq!(Cell::from_index(5), Ok(Cell::Center));
    assert_eq!(Cell::from_index(9), Ok(Cell::BottomRight));
    assert_eq!(Cell::try_from(0), Err(GameError::OutOfRange(0)));
    assert_eq!(Cell::try_from(10), Err(GameError::OutOfRange(10)));
}

#[test]
fn test_cell_parses_numbers_and_labels() {
    assert_eq!("3".parse::<Cell>(), Ok(Cell::TopRight));
    assert_eq!(" 7 ".parse::<Cell>(), Ok(Cell::BottomLeft));
    assert_eq!("center".parse::<Cell>(), Ok(Cell::Center));
    assert_eq!("Bottom-Right".parse::<Cell>(), Ok(Cell::BottomRight));
    assert_eq!("42".parse::<Cell>(), Err(GameError::OutOfRange(42)));
    assert!(matches!("corner".parse::<Cell>(), Err(GameError::Parse(_))));
}

#[test]
fn test_free_cells_filters_occupied() {
    let board = Board::from_marks(&[Cell::TopLeft], &[Cell::Center]).unwrap();

    let free: Vec<Cell> = board.free_cells().collect();
    assert_eq!(free.len(), 7);
    assert!(!free.contains(&Cell::TopLeft));
    assert!(!free.contains(&Cell::Center));
    assert!(free.contains(&Cell::BottomRight));
}

#[test]
fn test_cell_display_is_number() {
    assert_eq!(Cell::MiddleRight.to_string(), "6");
    assert_eq!(Cell::MiddleRight.label(), "Middle-right");
}
