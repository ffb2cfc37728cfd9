//! TUI application state and logic

use crate::core::Key;
use crate::engine::{Engine, Notification};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: Engine,
    /// Terminal notification waiting to be dismissed
    pub dialog: Option<Notification>,
    pub games_played: usize,
    pub games_won: usize,
    pub should_quit: bool,
}

/// Map a terminal key to a game key
///
/// Letters are typed, Backspace/Delete clear, Enter submits.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Key::letter(c),
        KeyCode::Backspace | KeyCode::Delete => Some(Key::Clear),
        KeyCode::Enter => Some(Key::Submit),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            dialog: None,
            games_played: 0,
            games_won: 0,
            should_quit: false,
        }
    }

    /// Forward a game key to the engine and open the dialog on game end
    pub fn press(&mut self, key: Key) {
        if let Some(notification) = self.engine.handle_key(key) {
            self.games_played += 1;
            if notification == Notification::Won {
                self.games_won += 1;
            }
            self.dialog = Some(notification);
        }
    }

    pub fn new_game(&mut self) {
        self.engine.restart();
        self.dialog = None;
    }

    /// Handle one terminal key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialog = None;
            }
            return;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
        } else if let Some(game_key) = map_key(key.code) {
            self.press(game_key);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::{Cursor, Phase};

    fn new_app() -> App {
        App::new(GameConfig::default().build().unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn map_terminal_keys() {
        assert_eq!(map_key(KeyCode::Char('A')), Some(Key::Letter(b'a')));
        assert_eq!(map_key(KeyCode::Char('1')), None);
        assert_eq!(map_key(KeyCode::Backspace), Some(Key::Clear));
        assert_eq!(map_key(KeyCode::Delete), Some(Key::Clear));
        assert_eq!(map_key(KeyCode::Enter), Some(Key::Submit));
        assert_eq!(map_key(KeyCode::Tab), None);
    }

    #[test]
    fn typing_fills_grid() {
        let mut app = new_app();
        type_line(&mut app, "world");
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);

        let state = app.engine.state();
        assert_eq!(state.grid().row_text(0, '_'), "world");
        assert_eq!(state.grid().row_text(1, '_'), "h____");
        assert_eq!(state.cursor(), Cursor { row: 1, col: 1 });
        assert!(app.dialog.is_none());
    }

    #[test]
    fn win_opens_dialog_once() {
        let mut app = new_app();
        type_line(&mut app, "hello");

        assert_eq!(app.dialog, Some(Notification::Won));
        assert_eq!((app.games_played, app.games_won), (1, 1));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.dialog, Some(Notification::Won));

        press(&mut app, KeyCode::Enter);
        assert!(app.dialog.is_none());

        type_line(&mut app, "hello");
        assert!(app.dialog.is_none());
        assert_eq!(app.games_played, 1);
    }

    #[test]
    fn loss_opens_dialog() {
        let mut app = new_app();
        for _ in 0..6 {
            type_line(&mut app, "world");
        }
        assert_eq!(app.dialog, Some(Notification::Lost));
        assert_eq!(app.engine.state().phase(), Phase::Lost);
        assert_eq!((app.games_played, app.games_won), (1, 0));
    }

    #[test]
    fn ctrl_n_starts_new_game() {
        let mut app = new_app();
        type_line(&mut app, "hello");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.dialog.is_none());
        assert_eq!(app.engine.state().phase(), Phase::Playing);
        assert_eq!(app.engine.state().cursor(), Cursor::default());
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.engine.state().cursor(), Cursor::default());
    }

    #[test]
    fn esc_closes_dialog_before_quitting() {
        let mut app = new_app();
        type_line(&mut app, "hello");
        press(&mut app, KeyCode::Esc);
        assert!(app.dialog.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = new_app();
        let mut event = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        app.handle_key_event(event);
        assert_eq!(app.engine.state().cursor(), Cursor::default());
    }
}
