//! Tests for the outcome evaluator.

use retrograde_core::{Board, Cell, GameState, Player, evaluate};

const X: Cell = Cell::Occupied(Player::X);
const O: Cell = Cell::Occupied(Player::O);
const E: Cell = Cell::Empty;

#[test]
fn test_sparse_boards_are_ongoing() {
    // No line can be complete with fewer than five cells filled.
    let boards = [
        Board::new(),
        Board::from_cells([X, E, E, E, E, E, E, E, E]),
        Board::from_cells([X, O, E, E, E, E, E, E, E]),
        Board::from_cells([X, O, X, E, E, E, E, E, E]),
        Board::from_cells([X, O, X, O, E, E, E, E, E]),
        Board::from_cells([E, E, O, E, X, X, E, O, E]),
    ];

    for board in &boards {
        let outcome = evaluate(board);
        assert_eq!(outcome.winner(), None, "board:\n{board}");
        assert!(!outcome.is_draw(), "board:\n{board}");
        assert!(!outcome.is_decided(), "board:\n{board}");
    }
}

#[test]
fn test_row_win() {
    let outcome = evaluate(&Board::from_cells([X, X, X, O, O, E, E, E, E]));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line(), Some([0, 1, 2]));
    assert!(!outcome.is_draw());
}

#[test]
fn test_column_win() {
    let outcome = evaluate(&Board::from_cells([X, O, E, X, O, E, E, O, X]));
    assert_eq!(outcome.winner(), Some(Player::O));
    assert_eq!(outcome.line(), Some([1, 4, 7]));
}

#[test]
fn test_diagonal_win() {
    let outcome = evaluate(&Board::from_cells([X, O, O, E, X, E, E, E, X]));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line(), Some([0, 4, 8]));

    let outcome = evaluate(&Board::from_cells([X, X, O, E, O, E, O, E, X]));
    assert_eq!(outcome.winner(), Some(Player::O));
    assert_eq!(outcome.line(), Some([2, 4, 6]));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let outcome = evaluate(&Board::from_cells([X, O, X, O, X, O, O, X, O]));
    assert_eq!(outcome.winner(), None);
    assert_eq!(outcome.line(), None);
    assert!(outcome.is_draw());
    assert!(outcome.is_decided());
}

#[test]
fn test_winner_takes_precedence_over_draw() {
    // Full board that also holds a complete line: the line is found first,
    // so the result is a win and never a draw.
    let outcome = evaluate(&Board::from_cells([X, X, X, O, O, X, O, X, O]));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line(), Some([0, 1, 2]));
    assert!(!outcome.is_draw());
}

#[test]
fn test_overlapping_lines_resolve_in_canonical_order() {
    // Malformed board where X completes the top row and the left column.
    // Rows are checked before columns, so the row is reported.
    let outcome = evaluate(&Board::from_cells([X, X, X, X, E, E, X, E, E]));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line(), Some([0, 1, 2]));
}

#[test]
fn test_engine_outcome_tracks_current_step() {
    // X takes the top row; the engine's outcome is derived from whichever
    // snapshot the step points at.
    let game = GameState::new()
        .apply_move(0)
        .apply_move(3)
        .apply_move(1)
        .apply_move(4)
        .apply_move(2);

    let outcome = game.outcome();
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line(), Some([0, 1, 2]));

    // Reviewing an earlier snapshot reports an ongoing game again.
    let review = game.jump_to(3);
    assert!(!review.outcome().is_decided());
    assert_eq!(review.jump_to(5).outcome().winner(), Some(Player::X));
}
