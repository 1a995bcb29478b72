//! The immutable N×N board value object.

use crate::error::BoardError;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// N×N tic-tac-toe board, read-only after construction.
///
/// Squares are stored in row-major order, so the square at `(row, col)`
/// lives at index `row * side + col`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Squares in row-major order.
    squares: Vec<Square>,
    /// Side length of the grid.
    side: usize,
}

impl Board {
    /// Parses a board from a flat string of cell markers.
    ///
    /// The number of characters must be a positive perfect square. Markers
    /// are case-insensitive; any character other than `X` or `O` is an
    /// empty square. Mark counts are not checked here, they are part of
    /// [`Board::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when the input is empty or its length is not
    /// a perfect square.
    #[instrument(skip(board), fields(length))]
    pub fn new(board: &str) -> Result<Self, BoardError> {
        let squares: Vec<Square> = board.chars().map(Square::from_char).collect();
        let length = squares.len();
        tracing::Span::current().record("length", length);

        let side = length.isqrt();
        if length == 0 || side * side != length {
            debug!(length, "Rejected board with non-square length");
            return Err(BoardError::invalid_board(length));
        }

        debug!(side, "Board parsed");
        Ok(Self { squares, side })
    }

    /// Side length of the grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of squares (`side * side`).
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false: a board has at least one square.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Square at the given row and column, if in range.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if row >= self.side || col >= self.side {
            return None;
        }
        self.squares.get(row * self.side + col).copied()
    }

    /// The line a player must fill to win: `side` copies of their mark.
    pub fn winning_line(&self, player: Player) -> Vec<Square> {
        vec![Square::Occupied(player); self.side]
    }

    /// Renders the normalized flat string (`X`, `O` and `.`).
    pub fn to_compact_string(&self) -> String {
        self.squares.iter().map(|sq| sq.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.chunks(self.side).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for sq in row {
                write!(f, "{}", sq.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Board {
    type Error = BoardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_compact_string()
    }
}
