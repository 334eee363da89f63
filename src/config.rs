use crate::common::Coordinate;

/// Side length of the board; valid coordinates are `0..BOARD_SIZE`.
pub const BOARD_SIZE: i8 = 9;
/// Fences in each player's budget at the start of a game.
pub const FENCES_PER_PLAYER: u8 = 10;

/// Starting squares, indexed by player.
pub const START_SQUARES: [Coordinate; 2] = [Coordinate::new(4, 0), Coordinate::new(4, 8)];
/// Goal rows (the opponent's baseline), indexed by player.
pub const GOAL_ROWS: [i8; 2] = [8, 0];
