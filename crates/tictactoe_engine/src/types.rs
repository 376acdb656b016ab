//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Terminal-state signal, always recomputed from the marks on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X holds a complete line.
    FirstWins,
    /// O holds a complete line.
    SecondWins,
    /// Every cell is filled and nobody holds a line.
    Draw,
    /// The game continues.
    Ongoing,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::FirstWins => Some(Player::X),
            Outcome::SecondWins => Some(Player::O),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning outcome for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Outcome::FirstWins,
            Player::O => Outcome::SecondWins,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::FirstWins | Outcome::SecondWins => {
                let player = self.winner().map(Player::symbol).unwrap_or('?');
                write!(f, "{} Wins!", player)
            }
            Outcome::Draw => write!(f, "Draw!"),
            Outcome::Ongoing => write!(f, "Game in progress..."),
        }
    }
}
