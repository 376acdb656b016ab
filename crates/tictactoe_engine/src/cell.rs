//! Cells of the 3x3 grid, numbered 1-9 in row-major order.

use crate::GameError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Numbered 1-9 row by row, so `1` is the top-left corner and `9` the
/// bottom-right. Only these nine values exist; integers outside that
/// range are rejected at conversion time with [`GameError::OutOfRange`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in ascending order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Cell number, 1-9.
    pub fn index(self) -> usize {
        self.offset() + 1
    }

    /// Zero-based offset into row-major storage, 0-8.
    pub(crate) fn offset(self) -> usize {
        self as usize
    }

    /// Creates a cell from its number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] for any other number.
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        index
            .checked_sub(1)
            .and_then(|offset| Self::ALL.get(offset).copied())
            .ok_or(GameError::OutOfRange(index))
    }

    /// Parses a cell number ("1"-"9") or a label ("center", "top-left").
    ///
    /// Labels match case-insensitively and in full.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Result<Self, GameError> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        Self::iter()
            .find(|cell| cell.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::Parse(format!("'{}' is not a cell", s)))
    }

    /// Row of the cell, 0-2 from the top.
    pub fn row(self) -> usize {
        self.offset() / 3
    }

    /// Column of the cell, 0-2 from the left.
    pub fn column(self) -> usize {
        self.offset() % 3
    }
}

impl TryFrom<usize> for Cell {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl std::str::FromStr for Cell {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label_or_number(s)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}
