//! Running score tallies across rounds.

use serde::{Deserialize, Serialize};
use tictactoe_engine::{Outcome, Player};

/// Wins per mark and draws, kept for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished round. Ongoing outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::FirstWins => self.x_wins += 1,
            Outcome::SecondWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player X: {} | Player O: {} | Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
