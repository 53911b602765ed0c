//! Uniform random move selection.

use crate::core::{Board, GameRng};

/// Why a move could not be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// Every cell is occupied.
    #[display("No moves available: board is full")]
    NoMovesAvailable,
}

impl std::error::Error for SelectError {}

/// Pick an empty cell uniformly at random.
///
/// Callers should check the game is not over first; a full board is an
/// error.
pub fn choose_random(board: &Board, rng: &mut GameRng) -> Result<usize, SelectError> {
    let empty = board.empty_cells();
    rng.choose(&empty).copied().ok_or(SelectError::NoMovesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Symbol};

    const X: Cell = Cell::Occupied(Symbol::X);
    const O: Cell = Cell::Occupied(Symbol::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_only_empty_cells_chosen() {
        let board = Board::from_cells([X, E, O, O, X, E, X, E, O]);
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let index = choose_random(&board, &mut rng).unwrap();
            assert!([1, 5, 7].contains(&index));
        }
    }

    #[test]
    fn test_single_empty_cell() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, E]);
        let mut rng = GameRng::new(1);
        assert_eq!(choose_random(&board, &mut rng), Ok(8));
    }

    #[test]
    fn test_full_board_errors() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let mut rng = GameRng::new(1);
        assert_eq!(choose_random(&board, &mut rng), Err(SelectError::NoMovesAvailable));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..20 {
            assert_eq!(choose_random(&board, &mut rng1), choose_random(&board, &mut rng2));
        }
    }

    #[test]
    fn test_all_cells_reachable() {
        let board = Board::new();
        let mut rng = GameRng::new(5);
        let mut seen = [false; 9];

        for _ in 0..500 {
            seen[choose_random(&board, &mut rng).unwrap()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
