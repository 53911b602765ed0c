//! Move application and termination rules.
//!
//! Every operation here is a pure function from a state (and input) to a new
//! state. Rejected moves return an error and the caller keeps the state it
//! already had.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameState, GameStatus, Symbol, WinLine, CELL_COUNT};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A symbol completed the given line.
    Winner(Symbol, WinLine),
    /// Board full, no line.
    Draw,
}

impl GameResult {
    /// Check if a symbol won.
    #[must_use]
    pub fn is_winner(&self, symbol: Symbol) -> bool {
        matches!(self, GameResult::Winner(s, _) if *s == symbol)
    }
}

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game continues with the other symbol to move.
    Continue,
    /// The mover completed a line. Terminal.
    Win(Symbol, WinLine),
    /// The move filled the board without a line. Terminal.
    Draw,
}

impl Outcome {
    /// Check if this outcome ended the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

impl From<GameResult> for Outcome {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Winner(symbol, line) => Outcome::Win(symbol, line),
            GameResult::Draw => Outcome::Draw,
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Evaluate a board for termination.
///
/// Returns `Some(result)` if the game has ended, `None` if it continues.
/// A complete line takes precedence over a full board.
#[must_use]
pub fn evaluate(board: &Board) -> Option<GameResult> {
    if let Some((symbol, line)) = board.winner() {
        Some(GameResult::Winner(symbol, line))
    } else if board.is_full() {
        Some(GameResult::Draw)
    } else {
        None
    }
}

/// Place the current symbol at `index`.
///
/// On success returns the new state and what the move did. The input state
/// is never modified.
pub fn apply_move(state: &GameState, index: usize) -> Result<(GameState, Outcome), MoveError> {
    if let Err(err) = check_move(state, index) {
        debug!(index, current = %state.current(), %err, "move rejected");
        return Err(err);
    }

    let mut next = *state;
    let (board, current, status) = next.parts_mut();
    let mover = *current;
    board.place(index, mover);

    let outcome = match evaluate(board) {
        Some(result) => {
            *status = match result {
                GameResult::Winner(symbol, line) => GameStatus::Won(symbol, line),
                GameResult::Draw => GameStatus::Draw,
            };
            Outcome::from(result)
        }
        None => {
            *current = mover.opponent();
            Outcome::Continue
        }
    };

    Ok((next, outcome))
}

/// Check whether a move is legal without applying it.
pub fn check_move(state: &GameState, index: usize) -> Result<(), MoveError> {
    if state.is_terminal() {
        return Err(MoveError::GameOver);
    }
    if index >= CELL_COUNT {
        return Err(MoveError::OutOfRange(index));
    }
    if !state.board().is_empty_at(index) {
        return Err(MoveError::Occupied(index));
    }
    Ok(())
}

/// Start the next game: empty board, X to move.
///
/// Scores are held outside `GameState` and are unaffected.
#[must_use]
pub fn rematch(_state: &GameState) -> GameState {
    GameState::new()
}
