//! Game mode selection.

use serde::{Deserialize, Serialize};
use tictactoe_engine::Player;

/// Game mode - who controls each mark?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans share the terminal.
    #[serde(rename = "pvp")]
    #[value(name = "pvp")]
    HumanVsHuman,
    /// Human against the perfect-play engine.
    #[default]
    #[serde(rename = "pvc")]
    #[value(name = "pvc")]
    HumanVsComputer,
    /// The engine plays both marks.
    #[serde(rename = "cvc")]
    #[value(name = "cvc")]
    ComputerVsComputer,
}

/// Who makes the move for a given mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Moves are read from the terminal.
    Human,
    /// Moves come from the decision engine.
    Computer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::ComputerVsComputer => "Computer vs Computer",
        }
    }

    /// Controller of `player`, given the mark the computer plays in
    /// human-vs-computer games.
    pub fn controller(&self, player: Player, computer: Player) -> Controller {
        match self {
            GameMode::HumanVsHuman => Controller::Human,
            GameMode::HumanVsComputer if player == computer => Controller::Computer,
            GameMode::HumanVsComputer => Controller::Human,
            GameMode::ComputerVsComputer => Controller::Computer,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_controllers_per_mode() {
        let pvc = GameMode::HumanVsComputer;
        assert_eq!(pvc.controller(Player::O, Player::O), Controller::Computer);
        assert_eq!(pvc.controller(Player::X, Player::O), Controller::Human);

        for player in [Player::X, Player::O] {
            assert_eq!(
                GameMode::HumanVsHuman.controller(player, Player::O),
                Controller::Human
            );
            assert_eq!(
                GameMode::ComputerVsComputer.controller(player, Player::O),
                Controller::Computer
            );
        }
    }

    #[test]
    fn test_every_mode_has_a_name() {
        for mode in GameMode::iter() {
            assert!(!mode.name().is_empty());
        }
    }
}
