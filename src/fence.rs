//! Fence bookkeeping and the single fence-blocking primitive shared by the
//! step, jump, and diagonal movement checks.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::{Coordinate, Orientation};
use crate::config::BOARD_SIZE;

/// All fences in play, keyed by orientation.
///
/// The board's outer boundary is seeded as permanent fences: every (0, y) as
/// a vertical anchor and every (x, 0) as a horizontal anchor. These double as
/// sentinels for the blocking checks, so movement off the top or left edge of
/// the board reads as "blocked by a fence" without a special case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenceSet {
    vertical: BTreeSet<Coordinate>,
    horizontal: BTreeSet<Coordinate>,
}

impl FenceSet {
    /// A fence set holding only the boundary sentinels.
    pub fn new() -> Self {
        let vertical = (0..BOARD_SIZE).map(|y| Coordinate::new(0, y)).collect();
        let horizontal = (0..BOARD_SIZE).map(|x| Coordinate::new(x, 0)).collect();
        Self {
            vertical,
            horizontal,
        }
    }

    fn collection(&self, orientation: Orientation) -> &BTreeSet<Coordinate> {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }

    /// `true` when a fence anchor already exists at `location` in the given
    /// orientation's collection.
    pub fn contains(&self, orientation: Orientation, location: Coordinate) -> bool {
        self.collection(orientation).contains(&location)
    }

    /// Record a new fence anchor. The engine rejects duplicates before
    /// calling this; fences are never removed.
    pub fn insert(&mut self, orientation: Orientation, location: Coordinate) {
        match orientation {
            Orientation::Vertical => self.vertical.insert(location),
            Orientation::Horizontal => self.horizontal.insert(location),
        };
    }

    /// Number of placed fences, boundary sentinels excluded.
    pub fn placed(&self) -> usize {
        self.vertical.len() + self.horizontal.len() - 2 * BOARD_SIZE as usize
    }

    /// `true` when a fence blocks the straight segment from `from` to `to`.
    ///
    /// For same-column movement: moving up is blocked by a horizontal anchor
    /// at `from` itself, moving down by one at (col, row + 1). Same-row
    /// movement is symmetric over vertical anchors and columns. Callers pass
    /// one-cell sub-segments for jumps and diagonals; a two-cell `to` still
    /// tests only the edge adjacent to `from`.
    pub fn blocks(&self, from: Coordinate, to: Coordinate) -> bool {
        if from.col == to.col {
            if from.row > to.row {
                self.horizontal.contains(&from)
            } else {
                self.horizontal.contains(&from.offset(0, 1))
            }
        } else if from.col > to.col {
            self.vertical.contains(&from)
        } else {
            self.vertical.contains(&from.offset(1, 0))
        }
    }
}

impl Default for FenceSet {
    fn default() -> Self {
        Self::new()
    }
}
