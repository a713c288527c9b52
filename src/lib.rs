//! # Connect Four
//!
//! Rules engine for Connect Four on any board of at least 4x4, with a
//! terminal front-end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: controller and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
