//! Exhaustive minimax search.
//!
//! Scores are from the point of view of the acting symbol (the mover at the
//! root), discounted by depth so faster wins and slower losses are preferred:
//!
//! - acting symbol has won: `10 - depth`
//! - opponent has won: `depth - 10`
//! - board full: `0`
//!
//! Children are tried in ascending cell order and only a strictly better
//! score replaces the incumbent, so ties go to the lowest index. The search
//! runs on a private copy of the board, placing and clearing marks in place.
//!
//! Alpha-beta pruning is optional (`SearchConfig::alpha_beta`) and does not
//! change the chosen move.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Board, GameRng, Symbol, CELL_COUNT};

use super::config::SearchConfig;
use super::random::{choose_random, SelectError};
use super::stats::SearchStats;

/// Base score for a win at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Bound outside every reachable score.
const INFINITY: i32 = 1000;

/// Minimax search context.
///
/// Owns the configuration and the statistics of the last search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best cell for `acting` and its score.
    ///
    /// Returns `None` if the board is already terminal (a line is complete
    /// or no cell is empty).
    pub fn search(&mut self, board: &Board, acting: Symbol, opponent: Symbol) -> Option<(usize, i32)> {
        let start = Instant::now();
        self.stats.reset();

        let mut scratch = *board;
        let (score, best) = self.minimax(&mut scratch, acting, acting, opponent, 0, -INFINITY, INFINITY);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.best_score = best.map(|_| score);

        trace!(
            ?best,
            score,
            nodes = self.stats.nodes_visited,
            leaves = self.stats.leaves,
            alpha_beta = self.config.alpha_beta,
            "minimax search complete"
        );

        best.map(|index| (index, score))
    }

    /// Choose a cell for `acting`, falling back to a random empty cell if the
    /// search finds no move.
    pub fn choose(
        &mut self,
        board: &Board,
        acting: Symbol,
        opponent: Symbol,
        rng: &mut GameRng,
    ) -> Result<usize, SelectError> {
        match self.search(board, acting, opponent) {
            Some((index, _)) => Ok(index),
            None => {
                debug!("minimax found no move, falling back to random");
                choose_random(board, rng)
            }
        }
    }

    /// Score `board` with `to_move` about to play.
    ///
    /// Returns the node score and, at non-terminal nodes, the best cell.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Symbol,
        acting: Symbol,
        opponent: Symbol,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<usize>) {
        self.stats.nodes_visited += 1;

        if let Some((winner, _)) = board.winner() {
            self.stats.leaves += 1;
            return if winner == acting {
                (WIN_SCORE - depth, None)
            } else {
                (depth - WIN_SCORE, None)
            };
        }
        if board.is_full() {
            self.stats.leaves += 1;
            return (0, None);
        }

        let maximizing = to_move == acting;
        let next = if maximizing { opponent } else { acting };
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for index in 0..CELL_COUNT {
            if !board.is_empty_at(index) {
                continue;
            }

            board.place(index, to_move);
            let (score, _) = self.minimax(board, next, acting, opponent, depth + 1, alpha, beta);
            board.clear(index);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(index);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(index);
                }
                beta = beta.min(best_score);
            }

            if self.config.alpha_beta && alpha >= beta {
                break;
            }
        }

        (best_score, best_move)
    }
}

/// Choose a cell for `acting` by exhaustive minimax without pruning.
///
/// Falls back to [`choose_random`] if the board is already terminal, which
/// errors with `NoMovesAvailable` on a full board.
pub fn choose_minimax(
    board: &Board,
    acting: Symbol,
    opponent: Symbol,
    rng: &mut GameRng,
) -> Result<usize, SelectError> {
    Minimax::new(SearchConfig::default()).choose(board, acting, opponent, rng)
}
