//! Board classification.

use crate::board::Board;
use crate::invariants::{UnreachableReason, first_violation};
use crate::rules::{count, has_won};
use crate::types::Player;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Classification of a board.
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
pub enum BoardState {
    /// Reachable, and nobody has completed a line.
    NoWinner,
    /// Reachable, and X completed a line.
    XWins,
    /// Reachable, and O completed a line.
    OWins,
    /// Well-formed but impossible under alternating play starting with X.
    UnreachableState,
}

impl BoardState {
    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            BoardState::XWins => Some(Player::X),
            BoardState::OWins => Some(Player::O),
            BoardState::NoWinner | BoardState::UnreachableState => None,
        }
    }

    /// Checks if the board could arise from legal play.
    pub fn is_reachable(self) -> bool {
        self != BoardState::UnreachableState
    }
}

/// A classification together with the facts that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new, Getters)]
pub struct Assessment {
    /// The classification.
    state: BoardState,
    /// The first violated invariant, for unreachable boards.
    reason: Option<UnreachableReason>,
    /// Number of X marks.
    x_count: usize,
    /// Number of O marks.
    o_count: usize,
    /// Side length of the board.
    side: usize,
}

impl Board {
    /// Classifies the board.
    ///
    /// Never fails: every board that parsed yields exactly one state.
    #[instrument(skip(self), fields(side = self.side()))]
    pub fn evaluate(&self) -> BoardState {
        *self.assess().state()
    }

    /// Classifies the board and reports why.
    #[instrument(skip(self), fields(side = self.side()))]
    pub fn assess(&self) -> Assessment {
        let x_count = count(self, Player::X);
        let o_count = count(self, Player::O);

        let reason = first_violation(self);
        let state = match reason {
            Some(_) => BoardState::UnreachableState,
            None if has_won(self, Player::X) => BoardState::XWins,
            None if has_won(self, Player::O) => BoardState::OWins,
            None => BoardState::NoWinner,
        };

        debug!(%state, ?reason, x_count, o_count, "Board evaluated");
        Assessment::new(state, reason, x_count, o_count, self.side())
    }
}
