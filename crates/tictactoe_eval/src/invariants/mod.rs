//! First-class reachability invariants.
//!
//! A board is reachable when some sequence of alternating moves, X first,
//! ending the game at the first completed line, produces it. Each invariant
//! below is one necessary condition; they are checked in a fixed order and
//! the first violation decides the reason reported for an unreachable board.

mod move_count;
mod orientation;
mod winner;

pub use move_count::MoveCountBalanced;
pub use orientation::{DiagonalsConsistent, SingleLinePerOrientation};
pub use winner::{OWinnerMovedLast, SingleWinner, XWinnerMovedLast};

use crate::board::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// An invariant every reachable board satisfies.
pub trait Reachability: Invariant<Board> {
    /// Reason reported when this invariant is violated.
    const REASON: UnreachableReason;
}

/// Why a well-formed board cannot arise from legal play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UnreachableReason {
    /// O has more marks than X, or X leads by more than one.
    MoveCountImbalance,
    /// Both diagonals filled by one player on an even-sided board.
    EvenSideDoubleDiagonal,
    /// More than one completed row, or more than one completed column.
    MultipleLinesPerOrientation,
    /// X completed a line but O has moved since.
    XWonOutOfTurn,
    /// O completed a line but X has moved since.
    OWonOutOfTurn,
    /// Both players completed a line.
    BothPlayersWon,
}

impl UnreachableReason {
    /// Description of the invariant that was violated.
    pub fn description(self) -> &'static str {
        match self {
            Self::MoveCountImbalance => MoveCountBalanced::description(),
            Self::EvenSideDoubleDiagonal => DiagonalsConsistent::description(),
            Self::MultipleLinesPerOrientation => SingleLinePerOrientation::description(),
            Self::XWonOutOfTurn => XWinnerMovedLast::description(),
            Self::OWonOutOfTurn => OWinnerMovedLast::description(),
            Self::BothPlayersWon => SingleWinner::description(),
        }
    }
}

fn check<I: Reachability>(board: &Board) -> Option<UnreachableReason> {
    if I::holds(board) {
        None
    } else {
        debug!(reason = %I::REASON, invariant = I::description(), "Invariant violated");
        Some(I::REASON)
    }
}

/// The first violated invariant, in evaluation order.
#[instrument(skip(board), fields(side = board.side()))]
pub fn first_violation(board: &Board) -> Option<UnreachableReason> {
    check::<MoveCountBalanced>(board)
        .or_else(|| check::<DiagonalsConsistent>(board))
        .or_else(|| check::<SingleLinePerOrientation>(board))
        .or_else(|| check::<XWinnerMovedLast>(board))
        .or_else(|| check::<OWinnerMovedLast>(board))
        .or_else(|| check::<SingleWinner>(board))
}

/// Every violated invariant, in evaluation order.
#[instrument(skip(board), fields(side = board.side()))]
pub fn violations(board: &Board) -> Vec<UnreachableReason> {
    [
        check::<MoveCountBalanced>(board),
        check::<DiagonalsConsistent>(board),
        check::<SingleLinePerOrientation>(board),
        check::<XWinnerMovedLast>(board),
        check::<OWinnerMovedLast>(board),
        check::<SingleWinner>(board),
    ]
    .into_iter()
    .flatten()
    .collect()
}
