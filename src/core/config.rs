//! Session configuration.
//!
//! The presentation layer supplies a `Configuration` at session start and
//! whenever the player changes a setting:
//! - `Mode`: two humans, or a human against the computer
//! - `Difficulty`: how the computer picks its moves
//! - `human_symbol`: which mark the human plays (X always opens)

use serde::{Deserialize, Serialize};

use super::Symbol;

/// Who is playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans alternate at the same board.
    #[default]
    TwoHuman,
    /// One human against the computer opponent.
    HumanVsComputer,
}

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Exhaustive minimax search.
    #[default]
    Hard,
}

/// Game setup chosen by the players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Two humans or human against computer.
    pub mode: Mode,

    /// Computer opponent strength. Ignored in `Mode::TwoHuman`.
    pub difficulty: Difficulty,

    /// The human's mark in `Mode::HumanVsComputer`.
    /// The computer plays the other one.
    pub human_symbol: Symbol,

    /// Seed for the easy opponent's RNG.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: Mode::TwoHuman,
            difficulty: Difficulty::Hard,
            human_symbol: Symbol::X,
            seed: None,
        }
    }
}

impl Configuration {
    /// The computer's mark.
    #[must_use]
    pub const fn computer_symbol(&self) -> Symbol {
        self.human_symbol.opponent()
    }

    /// Set the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the human's symbol.
    #[must_use]
    pub fn with_human_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = symbol;
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
