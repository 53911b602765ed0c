//! Win tallies across rematches.
//!
//! Only wins are counted. A draw leaves the tallies unchanged.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::engine::Outcome;
use crate::core::{Symbol, SymbolMap};

/// Wins per symbol for the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    wins: SymbolMap<u32>,
}

impl ScoreBoard {
    /// Create a scoreboard with both counts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scoreboard with explicit counts.
    #[must_use]
    pub const fn with_wins(x: u32, o: u32) -> Self {
        Self {
            wins: SymbolMap::new(x, o),
        }
    }

    /// Wins recorded for a symbol.
    #[must_use]
    pub fn wins(&self, symbol: Symbol) -> u32 {
        self.wins[symbol]
    }

    /// Iterate over (Symbol, wins) in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.wins.iter().map(|(s, &w)| (s, w))
    }
}

impl Index<Symbol> for ScoreBoard {
    type Output = u32;

    fn index(&self, symbol: Symbol) -> &Self::Output {
        &self.wins[symbol]
    }
}

/// Reset both counts to zero.
#[must_use]
pub fn new_game(_scoreboard: &ScoreBoard) -> ScoreBoard {
    ScoreBoard::new()
}

/// Tally a move outcome. Only `Outcome::Win` changes the scores.
#[must_use]
pub fn record_result(scoreboard: &ScoreBoard, outcome: &Outcome) -> ScoreBoard {
    let mut next = *scoreboard;
    if let Outcome::Win(symbol, _) = outcome {
        next.wins[*symbol] = next.wins[*symbol].saturating_add(1);
    }
    next
}
