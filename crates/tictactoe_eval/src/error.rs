//! Board construction errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// The input does not describe a square board.
///
/// Raised when the input length is zero or not a perfect square.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Invalid board: length {} is not a positive perfect square at {}:{}",
    length,
    file,
    line
)]
pub struct BoardError {
    /// Number of characters in the rejected input.
    pub length: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new invalid-board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn invalid_board(length: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            length,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Length of the rejected input.
    pub fn length(&self) -> usize {
        self.length
    }
}
