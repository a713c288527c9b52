//! Terminal UI for playing Connect Four: a controller that feeds key presses
//! into the game and a view that draws board snapshots.

mod app;
mod game_view;

pub use app::App;
