use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{DropOutcome, GameSession, GameStatus, Rejection};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let session = config.new_session()?;
        let selected_column = session.board().width() / 2; // Start in middle
        Ok(App {
            config,
            session,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match self.config.new_session() {
            Ok(session) => {
                self.selected_column = session.board().width() / 2;
                self.session = session;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => {
                tracing::error!(%err, "could not start a new game");
                self.message = Some(format!("Could not restart: {err}"));
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.drop_piece(self.selected_column) {
            Ok(outcome) => self.message = self.describe(outcome),
            Err(err) => {
                tracing::error!(%err, column = self.selected_column, "drop failed");
                self.message = Some(err.to_string());
            }
        }
    }

    fn describe(&self, outcome: DropOutcome) -> Option<String> {
        match outcome.rejection {
            Some(Rejection::ColumnFull) => return Some("Column is full!".to_string()),
            Some(Rejection::GameOver) => {
                return Some("Game over! Press 'r' to restart.".to_string())
            }
            None => {}
        }
        match outcome.status {
            GameStatus::Won(id) => Some(format!("{} is the winner!", self.session.player(id).name)),
            GameStatus::Tied => Some("It's a tie!".to_string()),
            GameStatus::InProgress => None,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerId;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = app();
        assert_eq!(app.selected_column(), 3);
        assert_eq!(app.session().current_player(), PlayerId::One);
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
    }

    #[test]
    fn test_enter_drops_piece() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().moves().len(), 1);
        assert_eq!(app.session().current_player(), PlayerId::Two);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = app();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.session().moves().len(), 6);
    }

    #[test]
    fn test_win_then_game_over_then_restart() {
        let mut app = app();
        // Player 1 stacks column 3, player 2 stacks column 4.
        for _ in 0..3 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Player 1 is the winner!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message(), Some("New game started!"));
        assert!(app.session().moves().is_empty());
        assert!(!app.session().is_terminal());
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
