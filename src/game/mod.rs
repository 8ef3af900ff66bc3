//! Core Connect Four game logic: board representation, player identities,
//! four-in-a-row detection and the game session state machine.

mod board;
mod player;
mod session;
pub mod win;

pub use board::{Board, Cell, Position, HEIGHT, MAX_SIZE, MIN_SIZE, WIDTH};
pub use player::{PieceColor, Player, PlayerId};
pub use session::{new_game, DropOutcome, GameSession, GameStatus, Move, Rejection};
