//! Move selection policies for the computer opponent.
//!
//! `MoveSelector` is the seam between the session and the search code:
//! - `RandomSelector`: uniform over empty cells (easy)
//! - `MinimaxSelector`: exhaustive minimax (hard)

use crate::core::{Board, Difficulty, GameRng, Symbol};

use super::config::SearchConfig;
use super::minimax::Minimax;
use super::random::{choose_random, SelectError};
use super::stats::SearchStats;

/// Policy for choosing the computer's cell.
pub trait MoveSelector: Send + Sync + std::fmt::Debug {
    /// Choose a cell index for `acting` on a non-terminal board.
    fn select(&mut self, board: &Board, acting: Symbol, rng: &mut GameRng) -> Result<usize, SelectError>;

    /// Statistics from the last selection, if the policy searches.
    fn stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// Uniform random selection.
#[derive(Clone, Debug, Default)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board, _acting: Symbol, rng: &mut GameRng) -> Result<usize, SelectError> {
        choose_random(board, rng)
    }
}

/// Minimax selection. The opponent is always `acting.opponent()`.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSelector {
    search: Minimax,
}

impl MinimaxSelector {
    /// Create a selector with the given search configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(config),
        }
    }
}

impl MoveSelector for MinimaxSelector {
    fn select(&mut self, board: &Board, acting: Symbol, rng: &mut GameRng) -> Result<usize, SelectError> {
        self.search.choose(board, acting, acting.opponent(), rng)
    }

    fn stats(&self) -> Option<&SearchStats> {
        Some(self.search.stats())
    }
}

/// Build the selector for a difficulty level.
#[must_use]
pub fn selector_for(difficulty: Difficulty, config: &SearchConfig) -> Box<dyn MoveSelector> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomSelector),
        Difficulty::Hard => Box::new(MinimaxSelector::new(config.clone())),
    }
}
