//! Board model: marks, turn order and terminal-state detection.

use crate::invariants::{BalancedMarks, Invariant, InvariantSet, PositionInvariants};
use crate::{Cell, GameError, Outcome, Player, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// 3x3 tic-tac-toe board.
///
/// Holds one square per cell, so the two players' marks can never
/// overlap. The player to move is derived from the mark counts: X moves
/// whenever both players have placed the same number of marks.
///
/// The board is a small `Copy` value; the search explores positions by
/// copying it rather than mutating and restoring a shared instance.
///
/// Serialized as the nine squares in row-major order. Deserialization runs
/// the same position checks as [`Board::from_marks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[Square; 9]", into = "[Square; 9]")]
pub struct Board {
    /// Squares in row-major order (cells 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board with X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a position from the cells held by each player.
    ///
    /// The player to move follows from the counts. Listing a cell twice
    /// for the same player has no extra effect.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InconsistentPosition`] if a cell is listed for
    /// both players, or the position could not arise from alternating play.
    #[instrument]
    pub fn from_marks(x_cells: &[Cell], o_cells: &[Cell]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for &cell in x_cells {
            board.squares[cell.offset()] = Square::Occupied(Player::X);
        }
        for &cell in o_cells {
            if board.get(cell) == Square::Occupied(Player::X) {
                return Err(GameError::InconsistentPosition(format!(
                    "cell {} is marked by both players",
                    cell
                )));
            }
            board.squares[cell.offset()] = Square::Occupied(Player::O);
        }
        board.validated()
    }

    /// Checks the position invariants, consuming and returning the board.
    fn validated(self) -> Result<Self, GameError> {
        PositionInvariants::check_all(&self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InconsistentPosition(descriptions)
        })?;
        Ok(self)
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.offset()]
    }

    /// Returns true if neither player has marked `cell`.
    pub fn is_cell_free(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Empty cells in ascending order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL
            .into_iter()
            .filter(move |&cell| self.is_cell_free(cell))
    }

    /// Number of marks `player` has on the board.
    pub fn mark_count(&self, player: Player) -> usize {
        let mark = Square::Occupied(player);
        self.squares.iter().filter(|&&s| s == mark).count()
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        if self.mark_count(Player::X) == self.mark_count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places the mover's mark on `cell` and passes the turn.
    ///
    /// Returns the outcome of the resulting position. Moves are accepted
    /// on any free cell; callers stop play once the outcome is terminal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOccupied`] if the cell already holds a
    /// mark. The board is not modified in that case.
    #[instrument(skip_all, fields(cell = %cell, player = %self.to_move()))]
    pub fn play(&mut self, cell: Cell) -> Result<Outcome, GameError> {
        if !self.is_cell_free(cell) {
            warn!("Rejected move onto occupied cell");
            return Err(GameError::CellOccupied(cell));
        }

        self.squares[cell.offset()] = Square::Occupied(self.to_move());
        debug_assert!(BalancedMarks::holds(self), "{}", BalancedMarks::description());

        let outcome = self.evaluate();
        debug!(?outcome, "Move applied");
        Ok(outcome)
    }

    /// Copy of the board with the mover's mark on `cell`.
    ///
    /// The caller guarantees the cell is free.
    pub(crate) fn with_mark(&self, cell: Cell) -> Self {
        let mut next = *self;
        next.squares[cell.offset()] = Square::Occupied(self.to_move());
        next
    }

    /// Derives the outcome of the current position.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Clears every cell and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
        debug!("Board reset");
    }

    /// Compact notation: nine characters, `X`, `O` or `.` per cell.
    pub fn notation(&self) -> String {
        self.squares
            .iter()
            .map(|square| match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            })
            .collect()
    }

    /// Builds a board from notation without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_squares_unchecked(notation: &str) -> Self {
        let mut board = Self::new();
        for (slot, ch) in board.squares.iter_mut().zip(notation.chars()) {
            *slot = match ch {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        board
    }
}

impl TryFrom<[Square; 9]> for Board {
    type Error = GameError;

    /// Builds a board from row-major squares, rejecting impossible positions.
    fn try_from(squares: [Square; 9]) -> Result<Self, Self::Error> {
        Self { squares }.validated()
    }
}

impl From<Board> for [Square; 9] {
    fn from(board: Board) -> Self {
        board.squares
    }
}

impl std::str::FromStr for Board {
    type Err = GameError;

    /// Parses compact notation.
    ///
    /// Accepts `X`/`x`, `O`/`o`, and `.`, `-` or `_` for an empty cell.
    /// Whitespace, `/` and `|` are ignored so rows may be separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        if symbols.len() != 9 {
            return Err(GameError::Parse(format!(
                "expected 9 board cells, found {}",
                symbols.len()
            )));
        }

        let mut board = Self::new();
        for (slot, ch) in board.squares.iter_mut().zip(symbols) {
            *slot = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => {
                    return Err(GameError::Parse(format!(
                        "unexpected board character '{}'",
                        other
                    )));
                }
            };
        }
        board.validated()
    }
}

impl std::fmt::Display for Board {
    /// Grid with marks, showing the number of each empty cell.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in Cell::ALL {
            match self.get(cell) {
                Square::Empty => write!(f, "{}", cell)?,
                Square::Occupied(player) => write!(f, "{}", player)?,
            }
            match (cell.column(), cell.row()) {
                (2, 2) => {}
                (2, _) => write!(f, "\n-+-+-\n")?,
                _ => write!(f, "|")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_follows_mark_counts() {
        let mut board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        board.play(Cell::Center).unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(board.get(Cell::Center), Square::Occupied(Player::X));
        board.play(Cell::TopLeft).unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.get(Cell::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Cell::BottomRight);
        assert!(board.is_cell_free(Cell::BottomRight));
        assert_eq!(next.get(Cell::BottomRight), Square::Occupied(Player::X));
        assert_eq!(next.to_move(), Player::O);
    }

    #[test]
    fn test_notation_roundtrip() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.notation(), "XO..X...O");
        assert_eq!(board.notation().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!("XO".parse::<Board>(), Err(GameError::Parse(_))));
        assert!(matches!(
            "XOZ......".parse::<Board>(),
            Err(GameError::Parse(_))
        ));
        assert!(matches!(
            "OO.......".parse::<Board>(),
            Err(GameError::InconsistentPosition(_))
        ));
    }

    #[test]
    fn test_grid_display() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
