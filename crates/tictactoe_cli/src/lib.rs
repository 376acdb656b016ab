//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for mode, computer mark and hints
//! - **Mode**: who controls each mark
//! - **Scoreboard**: running tallies across rounds
//! - **Session**: line-based rounds with the play-again loop
//!
//! The engine only ever sees a [`Board`](tictactoe_engine::Board); all of
//! the state above lives here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod mode;
mod scoreboard;
mod session;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use mode::{Controller, GameMode};
pub use scoreboard::Scoreboard;
pub use session::Session;
