//! Interactive rounds over a line-based terminal.
//!
//! The session owns everything the engine deliberately does not: the game
//! mode, who plays which mark, the running scoreboard and the play-again
//! prompt. Input and output are generic so rounds can be scripted in tests.

use crate::{Controller, GameConfig, Scoreboard};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Cell, DecisionEngine, Outcome, Player};
use tracing::{debug, info, instrument};

/// What a human typed at the move prompt.
enum HumanInput {
    Move(Cell),
    Quit,
}

/// A sequence of rounds sharing one scoreboard.
pub struct Session<R, W> {
    config: GameConfig,
    board: Board,
    engine: DecisionEngine,
    scoreboard: Scoreboard,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading moves from `input` and writing to `output`.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            config,
            board: Board::new(),
            engine: DecisionEngine::new(),
            scoreboard: Scoreboard::new(),
            input,
            output,
        }
    }

    /// Scores so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays rounds until a human quits or declines another round.
    #[instrument(skip(self), fields(mode = %self.config.mode()))]
    pub fn run(&mut self) -> Result<Scoreboard> {
        writeln!(self.output, "Mode: {}", self.config.mode())?;
        loop {
            let Some(outcome) = self.play_round()? else {
                info!("Session ended by player");
                break;
            };

            self.scoreboard.record(outcome);
            info!(?outcome, scores = %self.scoreboard, "Round finished");
            writeln!(self.output, "{}", self.board)?;
            writeln!(self.output, "{}", outcome)?;
            writeln!(self.output, "{}", self.scoreboard)?;

            if !self.ask_play_again()? {
                break;
            }
            self.board.reset();
        }
        Ok(self.scoreboard)
    }

    /// Plays one round from the current board. `None` if a human quit.
    fn play_round(&mut self) -> Result<Option<Outcome>> {
        writeln!(self.output, "Game in progress...")?;
        loop {
            let player = self.board.to_move();
            writeln!(self.output, "{}", self.board)?;
            writeln!(self.output, "Turn: Player {}", player)?;

            let cell = match self.controller(player) {
                Controller::Computer => self.computer_turn(player)?,
                Controller::Human => match self.human_turn(player)? {
                    HumanInput::Move(cell) => cell,
                    HumanInput::Quit => return Ok(None),
                },
            };

            let outcome = self
                .board
                .play(cell)
                .context("Failed to apply move")?;
            if outcome.is_terminal() {
                return Ok(Some(outcome));
            }
        }
    }

    fn controller(&self, player: Player) -> Controller {
        self.config.mode().controller(player, *self.config.computer())
    }

    fn computer_turn(&mut self, player: Player) -> Result<Cell> {
        let cell = self.engine.best_move(&self.board)?;
        debug!(%player, cell = %cell, "Computer move");
        writeln!(
            self.output,
            "Computer ({}) plays {} ({})",
            player,
            cell,
            cell.label()
        )?;
        Ok(cell)
    }

    /// Prompts until a free cell is entered. End of input counts as quitting.
    fn human_turn(&mut self, player: Player) -> Result<HumanInput> {
        if *self.config.hints() {
            let analysis = self.engine.analyze(&self.board);
            if let Some(best) = analysis.result.best {
                writeln!(
                    self.output,
                    "Hint: {} ({}), score {}",
                    best,
                    best.label(),
                    analysis.result.score
                )?;
            }
        }

        loop {
            write!(self.output, "Player {}, choose a cell (1-9, q to quit): ", player)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(HumanInput::Quit);
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(HumanInput::Quit);
            }

            match line.parse::<Cell>() {
                Ok(cell) if self.board.is_cell_free(cell) => return Ok(HumanInput::Move(cell)),
                Ok(cell) => {
                    debug!(cell = %cell, "Occupied cell entered");
                    writeln!(self.output, "Cell {} is already occupied", cell)?;
                }
                Err(e) => {
                    debug!(input = line, "Unrecognised cell");
                    writeln!(self.output, "Invalid input: {}", e)?;
                }
            }
        }
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "Play again? [y/n]: ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    /// Next input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then_some(line))
    }
}
