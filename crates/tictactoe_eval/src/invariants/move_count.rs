//! Move count invariant: X moves first and players alternate.

use super::{Invariant, Reachability, UnreachableReason};
use crate::board::Board;
use crate::rules::count;
use crate::types::Player;
use tracing::trace;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MoveCountBalanced;

impl Invariant<Board> for MoveCountBalanced {
    fn holds(board: &Board) -> bool {
        let x_count = count(board, Player::X);
        let o_count = count(board, Player::O);
        trace!(x_count, o_count, "Mark counts");
        o_count <= x_count && x_count - o_count <= 1
    }

    fn description() -> &'static str {
        "X moves first and players alternate, so X leads O by zero or one marks"
    }
}

impl Reachability for MoveCountBalanced {
    const REASON: UnreachableReason = UnreachableReason::MoveCountImbalance;
}
