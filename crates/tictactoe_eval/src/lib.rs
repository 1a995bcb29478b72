//! Validation and classification of N×N tic-tac-toe boards.
//!
//! A [`Board`] is parsed from a flat, row-major string of cell markers whose
//! length is a perfect square. [`Board::evaluate`] then decides whether the
//! board has no winner, a winner, or could not have come from legal play.
//!
//! # Example
//!
//! ```
//! use tictactoe_eval::{Board, BoardState};
//!
//! let board = Board::new("xxxo.oxo.")?;
//! assert_eq!(board.evaluate(), BoardState::XWins);
//!
//! let board: Board = "XXX...Ooo".parse()?;
//! assert_eq!(board.evaluate(), BoardState::UnreachableState);
//! # Ok::<(), tictactoe_eval::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod evaluation;
mod geometry;
mod types;

pub mod invariants;
pub mod rules;

pub use board::Board;
pub use error::BoardError;
pub use evaluation::{Assessment, BoardState};
pub use geometry::LineKind;
pub use invariants::{Invariant, Reachability, UnreachableReason};
pub use types::{Player, Square};
