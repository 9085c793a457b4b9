//! Core domain types: players, cells, and the board.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (moves first).
    #[display("X")]
    X,
    /// Player O (moves second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// No mark placed yet.
    #[display(".")]
    Empty,
    /// Cell holding a player's mark.
    #[display("{_0}")]
    Occupied(Player),
}

/// 3x3 board: nine cells in row-major order.
///
/// Cell indices run 0..9 with `row = index / 3` and `col = index % 3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;
    /// Cells per row (and per column).
    pub const SIDE: usize = 3;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from an explicit cell configuration.
    ///
    /// Accepts any configuration, including ones unreachable by legal play.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Returns the cell at the given index, or `None` when out of range.
    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    /// Whether the cell at the given index is empty.
    ///
    /// Out-of-range indices report `false`: there is no empty cell there.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Cell::Empty))
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy with the given cell set.
    ///
    /// Callers must pass an in-range index of an empty cell; the engine
    /// guards both before calling.
    pub(crate) fn with_cell(&self, cell: usize, value: Cell) -> Self {
        let mut next = self.clone();
        next.cells[cell] = value;
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Cell; 9]> for Board {
    fn from(cells: [Cell; 9]) -> Self {
        Self::from_cells(cells)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..Self::SIDE {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.cells[row * Self::SIDE + col])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_all_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn get_out_of_range_is_none() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn display_renders_marks_and_gaps() {
        let board = Board::new().with_cell(4, Cell::Occupied(Player::X));
        assert_eq!(board.to_string(), ".|.|.\n.|X|.\n.|.|.");
    }

    #[test]
    fn opponent_round_trips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }
}
