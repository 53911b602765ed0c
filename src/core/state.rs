//! Game state: board, turn, and status.
//!
//! `GameState` is a small `Copy` value. Engine operations take a state by
//! reference and return a new one, so a rejected move can never leave a
//! half-applied state behind.

use serde::{Deserialize, Serialize};

use super::board::{Board, WinLine};
use super::symbol::Symbol;

/// Where the game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// A symbol completed the given line. Terminal.
    Won(Symbol, WinLine),
    /// Board full with no line. Terminal.
    Draw,
}

impl GameStatus {
    /// Check if no more moves can be made.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol, _) => Some(symbol),
            _ => None,
        }
    }
}

/// Complete state of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current: Symbol,
    status: GameStatus,
}

impl GameState {
    /// Create a fresh game: empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Symbol::X,
            status: GameStatus::InProgress,
        }
    }

    /// Build a state from parts.
    ///
    /// No consistency checks are made; use for setting up positions.
    #[must_use]
    pub const fn from_parts(board: Board, current: Symbol, status: GameStatus) -> Self {
        Self { board, current, status }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The symbol whose turn it is.
    #[must_use]
    pub const fn current(&self) -> Symbol {
        self.current
    }

    /// The game status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if no more moves can be made.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Mutable parts for the rules engine.
    pub(crate) fn parts_mut(&mut self) -> (&mut Board, &mut Symbol, &mut GameStatus) {
        (&mut self.board, &mut self.current, &mut self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
