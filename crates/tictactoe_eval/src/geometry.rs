//! Line geometry: rows, columns and the two diagonals.

use crate::board::Board;
use crate::types::Square;
use serde::{Deserialize, Serialize};

/// Identifies one line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row, counted from the top (0-indexed).
    #[display("row {}", _0)]
    Row(usize),
    /// Column, counted from the left (0-indexed).
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Board {
    /// The `side` contiguous squares of row `row`.
    pub fn row(&self, row: usize) -> Option<Vec<Square>> {
        let side = self.side();
        if row >= side {
            return None;
        }
        let start = row * side;
        Some(self.squares()[start..start + side].to_vec())
    }

    /// Squares at `col`, `col + side`, `col + 2 * side`, ...
    pub fn column(&self, col: usize) -> Option<Vec<Square>> {
        let side = self.side();
        if col >= side {
            return None;
        }
        Some(self.squares().iter().skip(col).step_by(side).copied().collect())
    }

    /// Squares at `i * (side + 1)`.
    pub fn main_diagonal(&self) -> Vec<Square> {
        let side = self.side();
        (0..side).map(|i| self.squares()[i * (side + 1)]).collect()
    }

    /// Squares at `i * (side - 1)` for `i` in `1..=side`.
    pub fn anti_diagonal(&self) -> Vec<Square> {
        let side = self.side();
        (1..=side).map(|i| self.squares()[i * (side - 1)]).collect()
    }

    /// Every line: rows, then columns, then the main and anti diagonals.
    pub fn lines(&self) -> impl Iterator<Item = (LineKind, Vec<Square>)> + '_ {
        let side = self.side();
        let rows = (0..side).filter_map(move |r| self.row(r).map(|line| (LineKind::Row(r), line)));
        let columns =
            (0..side).filter_map(move |c| self.column(c).map(|line| (LineKind::Column(c), line)));
        let diagonals = [
            (LineKind::MainDiagonal, self.main_diagonal()),
            (LineKind::AntiDiagonal, self.anti_diagonal()),
        ];
        rows.chain(columns).chain(diagonals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn render(line: &[Square]) -> String {
        line.iter().map(|sq| sq.to_char()).collect()
    }

    #[test]
    fn test_rows_and_columns() {
        let board = Board::new("xo.ox..xo").unwrap();
        assert_eq!(render(&board.row(0).unwrap()), "XO.");
        assert_eq!(render(&board.row(2).unwrap()), ".XO");
        assert_eq!(render(&board.column(0).unwrap()), "XO.");
        assert_eq!(render(&board.column(1).unwrap()), "OXX");
        assert!(board.row(3).is_none());
        assert!(board.column(3).is_none());
    }

    #[test]
    fn test_diagonals_on_four_by_four() {
        let board = Board::new("x..o.x..o.x.o..x").unwrap();
        assert_eq!(board.main_diagonal(), vec![Square::Occupied(Player::X); 4]);
        assert_eq!(render(&board.anti_diagonal()), "O..O");
    }

    #[test]
    fn test_one_by_one_diagonals_share_the_square() {
        let board = Board::new("o").unwrap();
        assert_eq!(board.main_diagonal(), vec![Square::Occupied(Player::O)]);
        assert_eq!(board.anti_diagonal(), vec![Square::Occupied(Player::O)]);
    }

    #[test]
    fn test_lines_order_and_count() {
        let board = Board::new(".........").unwrap();
        let kinds: Vec<LineKind> = board.lines().map(|(kind, _)| kind).collect();
        assert_eq!(kinds.len(), 8);
        assert_eq!(kinds[0], LineKind::Row(0));
        assert_eq!(kinds[3], LineKind::Column(0));
        assert_eq!(kinds[6], LineKind::MainDiagonal);
        assert_eq!(kinds[7], LineKind::AntiDiagonal);
        assert!(board.lines().all(|(_, line)| line.len() == 3));
    }
}
