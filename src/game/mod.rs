//! Core Connect Four rules: board representation, players, and the game
//! state machine that validates moves, alternates turns, and detects wins
//! and draws.

mod board;
mod player;
mod snapshot;
mod state;

pub use board::{Board, Cell, Position, LINE_LENGTH, MIN_DIMENSION};
pub use player::Player;
pub use snapshot::BoardSnapshot;
pub use state::{GameState, GameStatus, MovePolicy};
