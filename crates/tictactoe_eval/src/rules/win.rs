//! Win and mark-count detection.

use crate::board::Board;
use crate::geometry::LineKind;
use crate::types::{Player, Square};
use tracing::instrument;

/// Number of squares holding the player's mark.
#[instrument(skip(board))]
pub fn count(board: &Board, player: Player) -> usize {
    board.squares().iter().filter(|sq| sq.is(player)).count()
}

/// Checks if every square of the line holds the player's mark.
pub fn is_winning_line(line: &[Square], player: Player) -> bool {
    !line.is_empty() && line.iter().all(|sq| sq.is(player))
}

/// Checks if the player has filled any row, column or diagonal.
#[instrument(skip(board), fields(side = board.side()))]
pub fn has_won(board: &Board, player: Player) -> bool {
    board.lines().any(|(_, line)| is_winning_line(&line, player))
}

/// Every completed line together with its owner.
#[instrument(skip(board), fields(side = board.side()))]
pub fn winning_lines(board: &Board) -> Vec<(LineKind, Player)> {
    board
        .lines()
        .filter_map(|(kind, line)| {
            line.first()
                .and_then(|sq| sq.player())
                .filter(|player| is_winning_line(&line, *player))
                .map(|player| (kind, player))
        })
        .collect()
}

/// Number of rows filled by either player.
#[instrument(skip(board), fields(side = board.side()))]
pub fn count_row_wins(board: &Board) -> usize {
    (0..board.side())
        .filter_map(|r| board.row(r))
        .filter(|line| completed(line))
        .count()
}

/// Number of columns filled by either player.
#[instrument(skip(board), fields(side = board.side()))]
pub fn count_column_wins(board: &Board) -> usize {
    (0..board.side())
        .filter_map(|c| board.column(c))
        .filter(|line| completed(line))
        .count()
}

fn completed(line: &[Square]) -> bool {
    is_winning_line(line, Player::X) || is_winning_line(line, Player::O)
}
