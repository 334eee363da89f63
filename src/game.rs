//! The Quoridor rules engine: pawn-move and fence-placement legality, turn
//! management, and win detection.
//!
//! Every mutating entry point runs an ordered validation pipeline and reports
//! the outcome as a plain `bool`; the first failing check rejects the call
//! and leaves the engine untouched. Callers are not told why an action was
//! rejected, only that it was.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::common::{Coordinate, Orientation, PlayerId};
use crate::config::{GOAL_ROWS, START_SQUARES};
use crate::fence::FenceSet;
use crate::player::{FenceCount, Player};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
}

/// Serializable snapshot of a game, for embedders that sync or save state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: [Player; 2],
    pub fences: FenceSet,
    pub turn: PlayerId,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

/// Core rules engine owning both players, the fences in play, and the turn
/// and win state.
///
/// One instance is one game; there is no reset. Once a player reaches the
/// opposite baseline the engine is frozen and every further mutating call
/// returns `false`.
pub struct GameEngine {
    players: [Player; 2],
    fences: FenceSet,
    turn: PlayerId,
    game_over: bool,
    winner: Option<PlayerId>,
}

impl GameEngine {
    /// Create an engine in the initial position: pawns on the centre squares
    /// of opposite edges, ten fences per player, player one to move.
    pub fn new() -> Self {
        Self {
            players: [
                Player::new(START_SQUARES[0]),
                Player::new(START_SQUARES[1]),
            ],
            fences: FenceSet::new(),
            turn: PlayerId::One,
            game_over: false,
            winner: None,
        }
    }

    /// Current pawn position of `player`.
    pub fn location(&self, player: PlayerId) -> Coordinate {
        self.players[player.index()].location()
    }

    /// Fence budget of `player`.
    pub fn fences(&self, player: PlayerId) -> FenceCount {
        self.players[player.index()].fences()
    }

    /// All fences in play, boundary sentinels included.
    pub fn fence_set(&self) -> &FenceSet {
        &self.fences
    }

    /// The player whose turn it is.
    pub fn current_turn(&self) -> PlayerId {
        self.turn
    }

    /// `true` once a player has reached the opposite baseline.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// `true` when `player` has won the game.
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == Some(player)
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(p) => GameStatus::Won(p),
            None => GameStatus::InProgress,
        }
    }

    /// Move `player`'s pawn to `destination`.
    ///
    /// Legal moves are a one-cell orthogonal step, a two-cell jump straight
    /// over the adjacent opponent, or a one-cell diagonal side-step around an
    /// adjacent opponent whose straight jump is fenced off. On success the
    /// pawn is moved, the win condition is evaluated, and the turn passes to
    /// the other player.
    pub fn move_pawn(&mut self, player: PlayerId, destination: Coordinate) -> bool {
        if self.game_over {
            trace!("{player} move to {destination} rejected: game is over");
            return false;
        }
        if self.turn != player {
            trace!("{player} move to {destination} rejected: not their turn");
            return false;
        }
        if !destination.in_bounds() {
            return false;
        }
        if !self.is_valid_move(player, destination) {
            return false;
        }
        if self.is_obstructed(player, destination) {
            return false;
        }

        self.players[player.index()].set_location(destination);
        debug!("{player} moved to {destination}");
        if destination.row == GOAL_ROWS[player.index()] {
            self.end_game(player);
        }
        self.next_turn();
        true
    }

    /// Place a fence for `player` at `location` in the given orientation.
    ///
    /// Rejected when the game is over, out of turn, when a fence already
    /// occupies that anchor (the pre-seeded boundary counts), when the anchor
    /// is off the board, or when the player's fence budget is exhausted. On
    /// success the fence is recorded permanently, the budget is debited, and
    /// the turn passes to the other player.
    ///
    /// Placements are not checked for leaving both pawns a path to their
    /// goal; a fence that walls a pawn in completely is accepted.
    pub fn place_fence(
        &mut self,
        player: PlayerId,
        orientation: Orientation,
        location: Coordinate,
    ) -> bool {
        if self.game_over {
            trace!("{player} fence at {location} rejected: game is over");
            return false;
        }
        if self.turn != player {
            trace!("{player} fence at {location} rejected: not their turn");
            return false;
        }
        if self.fences.contains(orientation, location) {
            return false;
        }
        if !location.in_bounds() {
            return false;
        }
        if self.players[player.index()].fences().available == 0 {
            return false;
        }

        self.fences.insert(orientation, location);
        self.players[player.index()].play_fence();
        debug!("{player} placed a {orientation:?} fence at {location}");
        self.next_turn();
        true
    }

    /// Snapshot the current state.
    pub fn state(&self) -> GameState {
        GameState {
            players: self.players,
            fences: self.fences.clone(),
            turn: self.turn,
            game_over: self.game_over,
            winner: self.winner,
        }
    }

    /// Restore an engine from a previously taken snapshot.
    pub fn from_state(state: GameState) -> Self {
        Self {
            players: state.players,
            fences: state.fences,
            turn: state.turn,
            game_over: state.game_over,
            winner: state.winner,
        }
    }

    /// `true` when either pawn stands on `square`.
    fn is_occupied(&self, square: Coordinate) -> bool {
        self.players.iter().any(|p| p.location() == square)
    }

    /// Movement-shape check: step, jump, or diagonal side-step from the
    /// mover's current square.
    fn is_valid_move(&self, player: PlayerId, destination: Coordinate) -> bool {
        let old = self.players[player.index()].location();
        if old.col == destination.col {
            self.is_valid_vertical_move(old, destination)
        } else if old.row == destination.row {
            self.is_valid_horizontal_move(old, destination)
        } else {
            self.is_valid_diagonal_move(old, destination)
        }
    }

    fn is_valid_vertical_move(&self, old: Coordinate, destination: Coordinate) -> bool {
        match destination.row - old.row {
            -1 | 1 => true,
            -2 => self.is_valid_jump(old.offset(0, -1), destination),
            2 => self.is_valid_jump(old.offset(0, 1), destination),
            _ => false,
        }
    }

    fn is_valid_horizontal_move(&self, old: Coordinate, destination: Coordinate) -> bool {
        match destination.col - old.col {
            -1 | 1 => true,
            -2 => self.is_valid_jump(old.offset(-1, 0), destination),
            2 => self.is_valid_jump(old.offset(1, 0), destination),
            _ => false,
        }
    }

    /// Diagonal side-step around an adjacent opponent.
    ///
    /// Legal only when the opponent stands on one of the two orthogonal
    /// neighbours shared with the destination, cannot be jumped straight
    /// through (a fence sits behind it; the boundary sentinels cover the top
    /// and left edges), and no fence closes the segment from the opponent's
    /// square to the destination.
    fn is_valid_diagonal_move(&self, old: Coordinate, destination: Coordinate) -> bool {
        let dc = destination.col - old.col;
        let dr = destination.row - old.row;
        if dc.abs() != 1 || dr.abs() != 1 {
            return false;
        }

        let vertical_neighbour = old.offset(0, dr);
        let horizontal_neighbour = old.offset(dc, 0);
        if self.is_occupied(vertical_neighbour) {
            if self.is_valid_jump(vertical_neighbour, vertical_neighbour.offset(0, dr)) {
                return false;
            }
            !self.fences.blocks(vertical_neighbour, destination)
        } else if self.is_occupied(horizontal_neighbour) {
            if self.is_valid_jump(horizontal_neighbour, horizontal_neighbour.offset(dc, 0)) {
                return false;
            }
            !self.fences.blocks(horizontal_neighbour, destination)
        } else {
            false
        }
    }

    /// A jump over `middle` to `destination` is valid when the opponent
    /// occupies `middle` and no fence closes the far segment.
    fn is_valid_jump(&self, middle: Coordinate, destination: Coordinate) -> bool {
        self.is_occupied(middle) && !self.fences.blocks(middle, destination)
    }

    /// Obstacle check: the destination square is taken, or a fence closes the
    /// segment leaving the mover's current square.
    fn is_obstructed(&self, player: PlayerId, destination: Coordinate) -> bool {
        if self.is_occupied(destination) {
            return true;
        }
        let old = self.players[player.index()].location();
        self.fences.blocks(old, destination)
    }

    fn end_game(&mut self, winner: PlayerId) {
        self.game_over = true;
        self.winner = Some(winner);
        debug!("{winner} wins");
    }

    fn next_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
