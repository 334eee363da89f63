//! Per-player state: pawn position and fence budget.

use serde::{Deserialize, Serialize};

use crate::common::Coordinate;
use crate::config::FENCES_PER_PLAYER;

/// A player's fence budget. `available + played` always equals
/// [`FENCES_PER_PLAYER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenceCount {
    pub available: u8,
    pub played: u8,
}

/// A single player's pawn position and fence budget.
///
/// Passive data holder: the engine performs all validation before calling
/// the setters here, so none of them guard their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    location: Coordinate,
    fences: FenceCount,
}

impl Player {
    /// Create a player with a full fence budget at `start`.
    pub fn new(start: Coordinate) -> Self {
        Self {
            location: start,
            fences: FenceCount {
                available: FENCES_PER_PLAYER,
                played: 0,
            },
        }
    }

    /// Current pawn position.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Overwrite the pawn position. The engine guarantees validity.
    pub fn set_location(&mut self, location: Coordinate) {
        self.location = location;
    }

    /// Current fence budget.
    pub fn fences(&self) -> FenceCount {
        self.fences
    }

    /// Spend one fence. The engine guarantees `available > 0`.
    pub fn play_fence(&mut self) {
        self.fences.available -= 1;
        self.fences.played += 1;
    }
}
