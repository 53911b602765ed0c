//! Session error types.

use crate::rules::MoveError;
use crate::search::SelectError;

/// Why a session event was refused. The session is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A computer turn was requested when the computer is not to move.
    #[display("It is not the computer's turn")]
    NotComputerTurn,

    /// The selector could not pick a cell.
    #[display("Move selection failed: {}", _0)]
    Select(SelectError),

    /// The chosen cell was rejected by the rules.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::NotComputerTurn => None,
            SessionError::Select(err) => Some(err),
            SessionError::Move(err) => Some(err),
        }
    }
}

impl From<SelectError> for SessionError {
    fn from(err: SelectError) -> Self {
        SessionError::Select(err)
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_from_conversions() {
        let err: SessionError = MoveError::GameOver.into();
        assert_eq!(err, SessionError::Move(MoveError::GameOver));

        let err: SessionError = SelectError::NoMovesAvailable.into();
        assert_eq!(err, SessionError::Select(SelectError::NoMovesAvailable));
    }

    #[test]
    fn test_display_and_source() {
        let err = SessionError::Move(MoveError::Occupied(4));
        assert_eq!(err.to_string(), "Move rejected: Cell 4 is already occupied");
        assert!(err.source().is_some());

        assert!(SessionError::NotComputerTurn.source().is_none());
    }
}
