//! Exhaustive minimax decision engine.
//!
//! Scores are from X's point of view: X maximizes, O minimizes. A win is
//! worth [`WIN_SCORE`] minus the number of plies taken to reach it, so
//! faster wins and slower losses are preferred. Children are explored in
//! ascending cell order and only a strictly better score replaces the
//! current choice, which makes the result a pure function of the board.

use crate::{Board, Cell, GameError, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Score of a win reached at the root.
pub const WIN_SCORE: i32 = 10;

/// Score and chosen move for one node of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value of the node, from X's point of view.
    pub score: i32,
    /// Move that attains the score; `None` at terminal nodes.
    pub best: Option<Cell>,
}

/// Counters gathered while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including the root.
    pub nodes: u64,
    /// Terminal positions scored.
    pub leaves: u64,
}

impl SearchStats {
    #[cfg(feature = "parallel")]
    fn absorb(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
    }
}

/// Root search result together with its statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Outcome of the analysed position itself.
    pub outcome: Outcome,
    /// Result at the root.
    pub result: SearchResult,
    /// Work done to obtain it.
    pub stats: SearchStats,
}

/// Perfect-play move chooser.
///
/// Stateless: it never holds a board and never modifies the one it is
/// given, so a single engine may serve both players.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Returns the optimal move for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMoves`] if the board is already won,
    /// lost or drawn.
    #[instrument(skip_all, fields(board = %board.notation(), player = %board.to_move()))]
    pub fn best_move(&self, board: &Board) -> Result<Cell, GameError> {
        let analysis = self.analyze(board);
        match analysis.result.best {
            Some(cell) if !analysis.outcome.is_terminal() => {
                debug!(cell = %cell, score = analysis.result.score, "Best move chosen");
                Ok(cell)
            }
            _ => {
                warn!(outcome = ?analysis.outcome, "Best move requested on a finished board");
                Err(GameError::NoLegalMoves)
            }
        }
    }

    /// Searches the full game tree below `board`.
    #[instrument(skip_all, fields(board = %board.notation()))]
    pub fn analyze(&self, board: &Board) -> Analysis {
        let mut stats = SearchStats::default();
        let result = search_root(board, &mut stats);
        debug!(
            score = result.score,
            best = ?result.best,
            nodes = stats.nodes,
            leaves = stats.leaves,
            "Search complete"
        );
        Analysis {
            outcome: board.evaluate(),
            result,
            stats,
        }
    }

    /// Minimax value of `board` searched as if `depth` plies had already
    /// been played.
    ///
    /// Always sequential. The mover is the board's player to move, which
    /// takes the maximizing role when it is X.
    pub fn minimax(&self, board: &Board, depth: i32) -> SearchResult {
        let mut stats = SearchStats::default();
        minimax(board, depth, &mut stats)
    }
}

/// Leaf score of a decided position, or `None` while play continues.
fn terminal_score(outcome: Outcome, depth: i32) -> Option<i32> {
    match outcome {
        Outcome::FirstWins => Some(WIN_SCORE - depth),
        Outcome::SecondWins => Some(depth - WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::Ongoing => None,
    }
}

/// Strict comparison: ties keep the earlier (lower) cell.
fn improves(maximizing: bool, candidate: i32, current: i32) -> bool {
    if maximizing {
        candidate > current
    } else {
        candidate < current
    }
}

fn worst_for(maximizing: bool) -> SearchResult {
    SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best: None,
    }
}

fn minimax(board: &Board, depth: i32, stats: &mut SearchStats) -> SearchResult {
    stats.nodes += 1;
    if let Some(score) = terminal_score(board.evaluate(), depth) {
        stats.leaves += 1;
        return SearchResult { score, best: None };
    }

    let maximizing = board.to_move() == Player::X;
    let mut chosen = worst_for(maximizing);
    for cell in board.free_cells() {
        let child = minimax(&board.with_mark(cell), depth + 1, stats);
        if improves(maximizing, child.score, chosen.score) {
            chosen = SearchResult {
                score: child.score,
                best: Some(cell),
            };
        }
    }
    chosen
}

#[cfg(not(feature = "parallel"))]
fn search_root(board: &Board, stats: &mut SearchStats) -> SearchResult {
    minimax(board, 0, stats)
}

/// Root children searched concurrently, each on its own copy of the board.
/// Results are reduced in cell order so the choice matches the sequential search.
#[cfg(feature = "parallel")]
fn search_root(board: &Board, stats: &mut SearchStats) -> SearchResult {
    use rayon::prelude::*;

    if board.evaluate().is_terminal() {
        return minimax(board, 0, stats);
    }

    let cells: Vec<Cell> = board.free_cells().collect();
    let children: Vec<(Cell, SearchResult, SearchStats)> = cells
        .into_par_iter()
        .map(|cell| {
            let mut branch = SearchStats::default();
            let result = minimax(&board.with_mark(cell), 1, &mut branch);
            (cell, result, branch)
        })
        .collect();

    stats.nodes += 1;
    let maximizing = board.to_move() == Player::X;
    let mut chosen = worst_for(maximizing);
    for (cell, child, branch) in children {
        stats.absorb(branch);
        if improves(maximizing, child.score, chosen.score) {
            chosen = SearchResult {
                score: child.score,
                best: Some(cell),
            };
        }
    }
    chosen
}
