//! Game engine: move application, history, and time travel.
//!
//! State is replaced wholesale on every transition. Each operation takes the
//! current state by reference and returns the next state, so callers can hold
//! on to prior states and every historical snapshot stays valid for display.

use crate::outcome::{Outcome, evaluate};
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One immutable board configuration in the game's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<usize>,
}

impl Snapshot {
    /// The board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell filled to reach this snapshot.
    ///
    /// `None` only for the initial, all-empty snapshot.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }
}

/// Display order for the move history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum SortOrder {
    /// Oldest move first.
    #[display("ascending")]
    Ascending,
    /// Newest move first.
    #[display("descending")]
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Complete game state: the snapshot history, the current position in it,
/// and the history display-order preference.
///
/// Whose turn comes next and the game's outcome are derived on demand, never
/// stored, so they cannot drift out of sync with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<Snapshot>,
    step: usize,
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a fresh game: one empty snapshot, step 0, ascending history.
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::Ascending)
    }

    /// Creates a fresh game with the given history display order.
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Snapshot {
                board: Board::new(),
                last_move: None,
            }],
            step: 0,
            sort_order,
        }
    }

    /// The board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.step].board
    }

    /// Current position in the history, 0-indexed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// All snapshots, oldest first. Never empty: the initial snapshot is
    /// never removed.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// The player who moves next: X on even steps, O on odd ones.
    pub fn next_player(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// History display-order preference.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Outcome of the board at the current step, recomputed on demand.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Applies a move for the next player at the given cell.
    ///
    /// A guarded no-op, not an error: if the game is already won, the cell is
    /// occupied, or the index is out of range, the returned state is
    /// identical to the current one. Otherwise any redo branch beyond the
    /// current step is discarded and the new snapshot appended.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn apply_move(&self, cell: usize) -> Self {
        if self.outcome().winner().is_some() {
            debug!(cell, "ignoring move: game already won");
            return self.clone();
        }
        if !self.board().is_empty(cell) {
            debug!(cell, "ignoring move: cell occupied or out of range");
            return self.clone();
        }

        let board = self.board().with_cell(cell, Cell::Occupied(self.next_player()));
        let mut history = self.history[..=self.step].to_vec();
        history.push(Snapshot {
            board,
            last_move: Some(cell),
        });

        debug!(cell, moves = history.len() - 1, board = %history[history.len() - 1].board, "move applied");

        Self {
            step: history.len() - 1,
            history,
            sort_order: self.sort_order,
        }
    }

    /// Jumps to an earlier or later point in the history.
    ///
    /// History contents are untouched; the next player follows from the step
    /// parity. Steps are always sourced from valid history indices, so an
    /// out-of-range argument is a caller bug: it trips a debug assertion and
    /// is clamped to the last snapshot in release builds.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Self {
        debug_assert!(step < self.history.len(), "step {step} out of range");

        Self {
            history: self.history.clone(),
            step: step.min(self.history.len() - 1),
            sort_order: self.sort_order,
        }
    }

    /// Flips the history display order. Pure presentation preference: the
    /// history, current step, and turn are unaffected.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            history: self.history.clone(),
            step: self.step,
            sort_order: self.sort_order.toggled(),
        }
    }

    /// Human-readable label for a history entry.
    ///
    /// "Go to start" for step 0; otherwise the move number and the filled
    /// cell as 1-indexed `(col, row)`.
    pub fn move_descriptor(&self, step: usize) -> String {
        match self.history.get(step).and_then(Snapshot::last_move) {
            Some(cell) => {
                let col = 1 + cell % Board::SIDE;
                let row = 1 + cell / Board::SIDE;
                format!("Go to move #{step} - ({col}, {row})")
            }
            None => "Go to start".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_single_empty_snapshot() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.history()[0].last_move(), None);
    }

    #[test]
    fn moves_alternate_players() {
        let game = GameState::new().apply_move(4);
        assert_eq!(game.board().get(4), Some(Cell::Occupied(Player::X)));
        assert_eq!(game.next_player(), Player::O);

        let game = game.apply_move(0);
        assert_eq!(game.board().get(0), Some(Cell::Occupied(Player::O)));
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn occupied_cell_is_a_no_op() {
        let game = GameState::new().apply_move(4);
        assert_eq!(game.apply_move(4), game);
    }

    #[test]
    fn out_of_range_cell_is_a_no_op() {
        let game = GameState::new();
        assert_eq!(game.apply_move(9), game);
    }

    #[test]
    fn descriptor_formats() {
        let game = GameState::new().apply_move(4);
        assert_eq!(game.move_descriptor(0), "Go to start");
        assert_eq!(game.move_descriptor(1), "Go to move #1 - (2, 2)");
    }
}
