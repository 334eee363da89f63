mod common;
mod config;
mod fence;
mod game;
mod logging;
mod player;

pub use common::{Coordinate, Orientation, PlayerId};
pub use config::{BOARD_SIZE, FENCES_PER_PLAYER, GOAL_ROWS, START_SQUARES};
pub use fence::FenceSet;
pub use game::{GameEngine, GameState, GameStatus};
pub use logging::init_logging;
pub use player::{FenceCount, Player};
