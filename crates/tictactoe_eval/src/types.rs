//! Core domain types for board evaluation.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Canonical uppercase marker for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Marker rendered for an empty square.
    pub const EMPTY_SYMBOL: char = '.';

    /// Reads a raw cell marker.
    ///
    /// `X`/`x` and `O`/`o` are marks; every other character is an empty square.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        }
    }

    /// Canonical marker for this square.
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => Self::EMPTY_SYMBOL,
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if this square holds the given player's mark.
    pub fn is(self, player: Player) -> bool {
        self == Square::Occupied(player)
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}
