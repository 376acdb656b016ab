//! tictactoe - unified CLI
//!
//! Interactive play, position analysis and engine self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use tictactoe_cli::{GameConfig, GameMode, Session};
use tictactoe_engine::{Board, DecisionEngine, Outcome, Player};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            computer,
            config,
            hints,
        } => run_play(mode, computer, config, hints),
        Command::Analyze { position } => run_analyze(&position),
        Command::Selfplay { games } => run_selfplay(games),
    }
}

/// Run interactive rounds on stdin/stdout
#[instrument]
fn run_play(
    mode: Option<GameMode>,
    computer: Option<Player>,
    config: Option<PathBuf>,
    hints: bool,
) -> Result<()> {
    let config = GameConfig::load(config.as_deref())
        .context("Failed to load config")?
        .with_overrides(mode, computer, hints);
    info!(?config, "Starting session");

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    let scores = session.run()?;

    println!();
    println!("Final score: {}", scores);
    Ok(())
}

/// Print the engine's view of a single position
#[instrument]
fn run_analyze(position: &str) -> Result<()> {
    let board: Board = position
        .parse()
        .with_context(|| format!("Invalid position '{}'", position))?;
    let analysis = DecisionEngine::new().analyze(&board);

    println!("{}", board);
    println!();
    println!("Outcome:  {}", analysis.outcome);
    if let Some(best) = analysis.result.best {
        println!("To move:  {}", board.to_move());
        println!("Best:     {} ({})", best, best.label());
    }
    println!("Score:    {}", analysis.result.score);
    println!(
        "Searched: {} nodes, {} leaves",
        analysis.stats.nodes, analysis.stats.leaves
    );
    Ok(())
}

/// Engine plays both marks; fails if any game is decisive
#[instrument]
fn run_selfplay(games: u32) -> Result<()> {
    let engine = DecisionEngine::new();
    let mut decisive = 0;

    for game in 1..=games {
        let mut board = Board::new();
        let mut outcome = Outcome::Ongoing;
        while !outcome.is_terminal() {
            let cell = engine.best_move(&board)?;
            outcome = board.play(cell)?;
        }

        println!("Game {}: {} {}", game, board.notation(), outcome);
        if outcome != Outcome::Draw {
            decisive += 1;
        }
    }

    if decisive > 0 {
        bail!("{} of {} self-play games were not drawn", decisive, games);
    }
    info!(games, "All self-play games drawn");
    Ok(())
}
