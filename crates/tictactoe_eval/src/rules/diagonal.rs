//! Diagonal parity check.

use super::win::is_winning_line;
use crate::board::Board;
use crate::types::Player;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Checks that the diagonals could have been completed together.
///
/// A single move can only complete both diagonals through their shared
/// center square, which exists only on odd-sided boards. Both diagonals
/// filled by the same player on an even-sided board is never reachable.
#[instrument(skip(board), fields(side = board.side()))]
pub fn diagonals_consistent(board: &Board) -> bool {
    if board.side() % 2 == 1 {
        return true;
    }
    let main = board.main_diagonal();
    let anti = board.anti_diagonal();
    let doubled = Player::iter()
        .find(|player| is_winning_line(&main, *player) && is_winning_line(&anti, *player));
    if let Some(player) = doubled {
        debug!(%player, "Both diagonals filled on an even-sided board");
        return false;
    }
    true
}
