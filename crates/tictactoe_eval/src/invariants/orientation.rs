//! Line-shape invariants: diagonal parity and one line per orientation.

use super::{Invariant, Reachability, UnreachableReason};
use crate::board::Board;
use crate::rules::{count_column_wins, count_row_wins, diagonals_consistent};
use tracing::trace;

/// Invariant: both diagonals are never filled by one player on an even side.
pub struct DiagonalsConsistent;

impl Invariant<Board> for DiagonalsConsistent {
    fn holds(board: &Board) -> bool {
        diagonals_consistent(board)
    }

    fn description() -> &'static str {
        "Both diagonals can only be completed together through a shared center square"
    }
}

impl Reachability for DiagonalsConsistent {
    const REASON: UnreachableReason = UnreachableReason::EvenSideDoubleDiagonal;
}

/// Invariant: at most one completed row and at most one completed column.
///
/// Completed lines are counted across both players.
pub struct SingleLinePerOrientation;

impl Invariant<Board> for SingleLinePerOrientation {
    fn holds(board: &Board) -> bool {
        let rows = count_row_wins(board);
        let columns = count_column_wins(board);
        trace!(rows, columns, "Completed lines per orientation");
        rows <= 1 && columns <= 1
    }

    fn description() -> &'static str {
        "At most one row and at most one column can be completed"
    }
}

impl Reachability for SingleLinePerOrientation {
    const REASON: UnreachableReason = UnreachableReason::MultipleLinesPerOrientation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_side_double_diagonal_violates() {
        assert!(!DiagonalsConsistent::holds(&Board::new("XXXX").unwrap()));
    }

    #[test]
    fn test_odd_side_double_diagonal_holds() {
        assert!(DiagonalsConsistent::holds(&Board::new("X.X.X.X.X").unwrap()));
    }

    #[test]
    fn test_row_and_column_together_hold() {
        // X fills row 0 and column 0 through the corner.
        assert!(SingleLinePerOrientation::holds(&Board::new("XXXXOOXO.").unwrap()));
    }

    #[test]
    fn test_two_rows_violate() {
        assert!(!SingleLinePerOrientation::holds(
            &Board::new("XXXXXXXXXXO.O.O.O.O.O.OOO").unwrap()
        ));
    }

    #[test]
    fn test_rows_of_different_players_violate() {
        assert!(!SingleLinePerOrientation::holds(&Board::new("XXX...OOO").unwrap()));
    }
}
