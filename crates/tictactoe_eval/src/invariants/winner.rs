//! Winner invariants: the game stops at the first completed line.

use super::{Invariant, Reachability, UnreachableReason};
use crate::board::Board;
use crate::rules::{count, has_won};
use crate::types::Player;

/// Invariant: if X has a line, X made the last move.
pub struct XWinnerMovedLast;

impl Invariant<Board> for XWinnerMovedLast {
    fn holds(board: &Board) -> bool {
        !(has_won(board, Player::X) && count(board, Player::X) == count(board, Player::O))
    }

    fn description() -> &'static str {
        "A line completed by X ends the game with X one mark ahead"
    }
}

impl Reachability for XWinnerMovedLast {
    const REASON: UnreachableReason = UnreachableReason::XWonOutOfTurn;
}

/// Invariant: if O has a line, O made the last move.
pub struct OWinnerMovedLast;

impl Invariant<Board> for OWinnerMovedLast {
    fn holds(board: &Board) -> bool {
        !(has_won(board, Player::O) && count(board, Player::O) < count(board, Player::X))
    }

    fn description() -> &'static str {
        "A line completed by O ends the game with equal mark counts"
    }
}

impl Reachability for OWinnerMovedLast {
    const REASON: UnreachableReason = UnreachableReason::OWonOutOfTurn;
}

/// Invariant: at most one player has a line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        !(has_won(board, Player::X) && has_won(board, Player::O))
    }

    fn description() -> &'static str {
        "Only one player can complete a line"
    }
}

impl Reachability for SingleWinner {
    const REASON: UnreachableReason = UnreachableReason::BothPlayersWon;
}
