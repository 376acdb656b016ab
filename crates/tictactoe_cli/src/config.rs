//! Session configuration loaded from TOML.

use crate::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for an interactive session.
///
/// ```toml
/// mode = "pvc"      # pvp, pvc or cvc
/// computer = "O"    # mark played by the engine in pvc
/// hints = false     # show the engine's move suggestion to humans
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who controls each mark.
    #[serde(default = "default_mode")]
    mode: GameMode,

    /// Mark played by the computer in human-vs-computer games.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Print the engine's suggestion before each human move.
    #[serde(default)]
    hints: bool,
}

fn default_mode() -> GameMode {
    GameMode::HumanVsComputer
}

fn default_computer() -> Player {
    Player::O
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            computer: default_computer(),
            hints: false,
        }
    }
}

impl GameConfig {
    /// Creates a configuration from explicit values.
    pub fn new(mode: GameMode, computer: Player, hints: bool) -> Self {
        Self {
            mode,
            computer,
            hints,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the session configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`]
    /// is used when present and built-in defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        computer: Option<Player>,
        hints: bool,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        self.hints |= hints;
        self
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
