//! Terminal UI: renders a [`GameSession`](crate::game::GameSession) and
//! turns key presses into drops. Holds no game rules of its own.

mod app;
mod game_view;

pub use app::App;
