use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{GameState, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive two-player game: turns key presses into moves on a
/// [`GameState`] and repaints it after each one.
pub struct App {
    game_state: GameState,
    start_column: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, GameError> {
        let game_state = config.game.new_game()?;
        let start_column = config
            .ui
            .start_column(game_state.columns())
            .min(game_state.columns() - 1);
        Ok(App {
            game_state,
            start_column,
            selected_column: start_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        tracing::info!(
            rows = self.game_state.rows(),
            columns = self.game_state.columns(),
            "starting game"
        );
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Only presses; some platforms also report releases
        if key.kind != KeyEventKind::Press {
            return;
        }

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
                if self.selected_column + 1 < self.game_state.columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc(self.selected_column as isize);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as isize - '1' as isize;
                if let Ok(col) = usize::try_from(column) {
                    if col < self.game_state.columns() {
                        self.selected_column = col;
                    }
                }
                self.drop_disc(column);
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Submit a move and describe the outcome in the message line
    fn drop_disc(&mut self, column: isize) {
        match self.game_state.submit_move(column) {
            Ok(_) => {
                self.message = match self.game_state.status() {
                    GameStatus::Won(player) => Some(format!(
                        "{} wins! Press 'r' to play again.",
                        player.name()
                    )),
                    GameStatus::Draw => Some("It's a tie! Press 'r' to play again.".to_string()),
                    GameStatus::InProgress { .. } => None,
                };
            }
            Err(GameError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(GameError::ColumnOutOfRange { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err @ GameError::InvalidDimensions { .. }) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn small_app() -> App {
        let mut config = AppConfig::default();
        config.game.rows = 4;
        config.game.columns = 4;
        App::new(&config).unwrap()
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::new(&AppConfig::default()).unwrap();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.game_state.current_player(), Some(Player::Red));
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = small_app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = small_app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game_state.board_snapshot().get(3, 1),
            Cell::Occupied(Player::Red)
        );
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_digit_drops_directly() {
        let mut app = small_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.selected_column, 3);
        assert_eq!(
            app.game_state.board_snapshot().get(3, 3),
            Cell::Occupied(Player::Red)
        );

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message.as_deref(), Some("Invalid column!"));
        assert_eq!(app.game_state.current_player(), Some(Player::Yellow));
    }

    #[test]
    fn test_full_column_message() {
        let mut app = small_app();
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('1'));
        }
        assert_eq!(app.message.as_deref(), Some("Column 1 is full!"));
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = small_app();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game_state.winner(), Some(Player::Red));
        assert_eq!(
            app.message.as_deref(),
            Some("Red wins! Press 'r' to play again.")
        );

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state.winner(), None);
        assert!(app.game_state.board_snapshot().is_empty());
        assert_eq!(app.selected_column, 2);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = small_app();
        press(&mut app, KeyCode::Enter);
        let board = app.game_state.board_snapshot();

        app.handle_key(KeyEvent::new_with_kind(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(app.game_state.board_snapshot(), board);
        assert_eq!(app.game_state.current_player(), Some(Player::Yellow));
    }

    #[test]
    fn test_quit() {
        let mut app = small_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
