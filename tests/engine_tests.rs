//! Game engine integration tests: move application, termination, scores.

use proptest::prelude::*;

use rust_ttt::core::{Board, Cell, GameState, GameStatus, Symbol, WinLine};
use rust_ttt::rules::{apply_move, new_game, record_result, rematch, MoveError, Outcome, ScoreBoard};

const X: Cell = Cell::Occupied(Symbol::X);
const O: Cell = Cell::Occupied(Symbol::O);
const E: Cell = Cell::Empty;

/// Play a sequence of choices, each picking among the empty cells, until
/// the choices run out or the game ends.
fn play_choices(choices: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &choice in choices {
        if state.is_terminal() {
            break;
        }
        let empty = state.board().empty_cells();
        let index = empty[choice % empty.len()];
        state = apply_move(&state, index).unwrap().0;
    }
    state
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_center_opening() {
    let (state, outcome) = apply_move(&GameState::new(), 4).unwrap();

    assert_eq!(state.board().cells(), &[E, E, E, E, X, E, E, E, E]);
    assert_eq!(state.current(), Symbol::O);
    assert_eq!(outcome, Outcome::Continue);
}

#[test]
fn test_top_row_win() {
    let state = GameState::from_parts(
        Board::from_cells([X, X, E, O, O, E, E, E, E]),
        Symbol::X,
        GameStatus::InProgress,
    );

    let (state, outcome) = apply_move(&state, 2).unwrap();

    assert_eq!(outcome, Outcome::Win(Symbol::X, WinLine([0, 1, 2])));
    assert!(state.is_terminal());
}

#[test]
fn test_full_board_draw_either_turn() {
    // X O X / X O O / O X _ ; neither mark at 8 completes a line.
    let cells = [X, O, X, X, O, O, O, X, E];

    for mover in [Symbol::X, Symbol::O] {
        let state = GameState::from_parts(Board::from_cells(cells), mover, GameStatus::InProgress);
        let (state, outcome) = apply_move(&state, 8).unwrap();

        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(state.status(), GameStatus::Draw);
    }
}

#[test]
fn test_full_game_x_wins_diagonal() {
    let mut state = GameState::new();
    let moves = [0, 1, 4, 2];
    for index in moves {
        state = apply_move(&state, index).unwrap().0;
    }

    let (state, outcome) = apply_move(&state, 8).unwrap();
    assert_eq!(outcome, Outcome::Win(Symbol::X, WinLine([0, 4, 8])));
    assert_eq!(apply_move(&state, 3), Err(MoveError::GameOver));
}

#[test]
fn test_rematch_keeps_external_scores() {
    let scores = ScoreBoard::with_wins(2, 1);
    let (played, _) = apply_move(&GameState::new(), 4).unwrap();

    let fresh = rematch(&played);

    assert_eq!(fresh.board(), &Board::new());
    assert_eq!(fresh.current(), Symbol::X);
    assert_eq!(fresh.status(), GameStatus::InProgress);
    assert_eq!(scores, ScoreBoard::with_wins(2, 1));
}

#[test]
fn test_scores_across_games() {
    let mut scores = ScoreBoard::new();
    scores = record_result(&scores, &Outcome::Win(Symbol::X, WinLine([0, 1, 2])));
    scores = record_result(&scores, &Outcome::Draw);
    scores = record_result(&scores, &Outcome::Win(Symbol::O, WinLine([2, 4, 6])));
    scores = record_result(&scores, &Outcome::Win(Symbol::X, WinLine([3, 4, 5])));

    assert_eq!(scores.wins(Symbol::X), 2);
    assert_eq!(scores.wins(Symbol::O), 1);

    assert_eq!(new_game(&scores), ScoreBoard::with_wins(0, 0));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_invalid_index_leaves_state_unchanged(
        choices in prop::collection::vec(0usize..9, 0..9),
        index in 9usize..1000,
    ) {
        let state = play_choices(&choices);
        let before = state;

        let result = apply_move(&state, index);

        if state.is_terminal() {
            prop_assert_eq!(result, Err(MoveError::GameOver));
        } else {
            prop_assert_eq!(result, Err(MoveError::OutOfRange(index)));
        }
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_occupied_cell_rejected(choices in prop::collection::vec(0usize..9, 1..9)) {
        let state = play_choices(&choices);
        prop_assume!(!state.is_terminal());

        for index in 0..9 {
            if !state.board().is_empty_at(index) {
                prop_assert_eq!(apply_move(&state, index), Err(MoveError::Occupied(index)));
            }
        }
    }

    #[test]
    fn prop_turn_toggles_after_continue(choices in prop::collection::vec(0usize..9, 0..8)) {
        let state = play_choices(&choices);
        prop_assume!(!state.is_terminal());

        let mover = state.current();
        for index in state.board().empty_cells() {
            let (next, outcome) = apply_move(&state, index).unwrap();
            if outcome == Outcome::Continue {
                prop_assert_eq!(next.current(), mover.opponent());
            } else {
                prop_assert!(next.is_terminal());
            }
        }
    }

    #[test]
    fn prop_terminal_rejects_every_cell(choices in prop::collection::vec(0usize..9, 9)) {
        let state = play_choices(&choices);
        prop_assert!(state.is_terminal());

        for index in 0..9 {
            prop_assert_eq!(apply_move(&state, index), Err(MoveError::GameOver));
        }
    }
}
