//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! The engine owns an append-only history of board snapshots and a pointer
//! into it. Every operation is a pure transition from one [`GameState`] to
//! the next; rendering and input belong to a frontend that calls in and
//! re-draws whenever the state it holds is replaced.
//!
//! # Example
//!
//! ```
//! use retrograde_core::{GameState, Player};
//!
//! let game = GameState::new().apply_move(4).apply_move(0);
//! assert_eq!(game.step(), 2);
//! assert_eq!(game.next_player(), Player::X);
//!
//! // Jump back and branch: the redo history is discarded.
//! let game = game.jump_to(1).apply_move(8);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod outcome;
mod types;

pub use engine::{GameState, Snapshot, SortOrder};
pub use outcome::{Outcome, evaluate};
pub use types::{Board, Cell, Player};
