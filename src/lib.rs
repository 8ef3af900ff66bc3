//! # Connect Four
//!
//! Two-player Connect Four on a 7x6 grid. The core tracks the board, detects
//! four-in-a-row and runs the turn/terminal state machine; a thin terminal
//! front-end built with Ratatui drives it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, game session
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`ui`] — Terminal UI: game view and key handling

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

pub use game::{new_game, DropOutcome, GameSession, GameStatus, Player, PlayerId};
