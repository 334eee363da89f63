//! Common types for Quoridor: board coordinates, player identity, and
//! fence orientation.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// A board square as an ordered (col, row) pair.
///
/// Origin (0, 0) is the top-left corner; `col` increases rightward and `row`
/// increases downward. Components are signed so that out-of-range input can
/// be represented and rejected by the engine's boundary check instead of
/// wrapping at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub col: i8,
    pub row: i8,
}

impl Coordinate {
    /// Create a coordinate from (col, row).
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// The coordinate displaced by (dc, dr). May leave the board.
    pub const fn offset(self, dc: i8, dr: i8) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// `true` when the coordinate lies inside the playing area.
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.col) && (0..BOARD_SIZE).contains(&self.row)
    }
}

impl From<(i8, i8)> for Coordinate {
    fn from((col, row): (i8, i8)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Identity of one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into per-player arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// Orientation of a fence segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Anchored at (col, row), blocks horizontal movement between columns
    /// `col - 1` and `col` at that row.
    Vertical,
    /// Anchored at (col, row), blocks vertical movement between rows
    /// `row - 1` and `row` at that column.
    Horizontal,
}
