//! Board rules.
//!
//! Pure functions over an immutable [`Board`](crate::Board). Rules are
//! kept apart from storage so the reachability invariants can compose them.

pub mod diagonal;
pub mod win;

pub use diagonal::diagonals_consistent;
pub use win::{
    count, count_column_wins, count_row_wins, has_won, is_winning_line, winning_lines,
};
