//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::provider::error::ProviderError;
use crate::quote::Quote;
use crate::ui::dashboard::{DashboardState, InputMode, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

type FetchResult = Result<Quote, ProviderError>;

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with the quote card and liked list.
    Dashboard,
}

/// Whether the UI loop should keep going after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state, live from startup so the first fetch runs behind the splash.
    state: DashboardState,

    /// Handed to fetch tasks to report their result.
    fetch_sender: mpsc::Sender<FetchResult>,

    /// Receives results from fetch tasks.
    fetch_receiver: mpsc::Receiver<FetchResult>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(state: DashboardState) -> Self {
        let (fetch_sender, fetch_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            current_screen: Screen::Splash,
            state,
            fetch_sender,
            fetch_receiver,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Starts a quote fetch on a background task.
    ///
    /// The result is applied by [`App::drain_fetch_results`] on the UI loop.
    pub fn start_fetch(&mut self) {
        self.state.controller.begin_fetch();
        let provider = self.state.controller.provider();
        let sender = self.fetch_sender.clone();
        tokio::spawn(async move {
            let result = provider.random_quote().await;
            let _ = sender.send(result).await;
        });
    }

    /// Applies every finished fetch, in completion order. Returns how many were applied.
    pub fn drain_fetch_results(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.fetch_receiver.try_recv() {
            self.state.controller.complete_fetch(result);
            applied += 1;
        }
        applied
    }

    fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
    }

    /// Handles one key press for the current screen.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        match self.current_screen {
            Screen::Splash => {
                if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
                    return KeyOutcome::Quit;
                }
                // Any other key skips the splash screen
                self.show_dashboard();
                KeyOutcome::Continue
            }
            Screen::Dashboard => match self.state.input_mode() {
                InputMode::Normal => self.handle_normal_key(code),
                InputMode::Search => {
                    self.handle_search_key(code);
                    KeyOutcome::Continue
                }
            },
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Char('n') => {
                // One fetch at a time from the keyboard
                if !self.state.controller.is_loading() {
                    self.start_fetch();
                }
            }
            KeyCode::Char('l') | KeyCode::Char(' ') => {
                // Unliking can shrink the visible list
                self.state.controller.toggle_like();
                self.state.clamp_selection();
            }
            KeyCode::Char('/') => self.state.set_input_mode(InputMode::Search),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.state.remove_selected();
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.state.set_input_mode(InputMode::Normal),
            KeyCode::Backspace => self.state.controller.pop_search_char(),
            KeyCode::Char(c) => self.state.controller.push_search_char(c),
            _ => {}
        }
        self.state.clamp_selection();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
///
/// Kicks off the startup fetch before the first frame.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    app.start_fetch();

    // UI event loop
    loop {
        app.drain_fetch_results();
        app.state.update();
        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.show_dashboard();
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DashboardController;
    use crate::provider::MockQuoteProvider;
    use crate::consts::cli_consts::LIKES_KEY;
    use crate::store::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn app_with_quote(text: &'static str, author: &'static str) -> App {
        let mut provider = MockQuoteProvider::new();
        provider
            .expect_random_quote()
            .returning(move || Ok(Quote::new(text, author)));
        let controller = DashboardController::new(Arc::new(provider), Box::new(MemoryStore::new()));
        let state = DashboardState::new(controller, "http://test".to_string(), Instant::now(), false);
        let mut app = App::new(state);
        app.show_dashboard();
        app
    }

    async fn wait_for_fetch(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while app.drain_fetch_results() == 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("fetch result never arrived");
    }

    #[tokio::test]
    // [N] fetches, [L] likes, [L] again unlikes.
    async fn test_fetch_and_like_with_keys() {
        let mut app = app_with_quote("A", "B");

        assert_eq!(app.handle_key(KeyCode::Char('n')), KeyOutcome::Continue);
        assert!(app.state().controller.is_loading());
        wait_for_fetch(&mut app).await;
        assert!(!app.state().controller.is_loading());
        assert_eq!(
            app.state().controller.current_quote(),
            Some(&Quote::new("A", "B"))
        );

        app.handle_key(KeyCode::Char('l'));
        assert!(app.state().controller.is_current_quote_liked());
        app.handle_key(KeyCode::Char('l'));
        assert!(app.state().controller.liked_quotes().is_empty());
    }

    #[tokio::test]
    // A second [N] while loading does not start another fetch.
    async fn test_new_quote_ignored_while_loading() {
        let mut app = app_with_quote("A", "B");
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Char('n'));
        wait_for_fetch(&mut app).await;
        tokio::task::yield_now().await;
        assert_eq!(app.drain_fetch_results(), 0);
    }

    #[tokio::test]
    // In search mode, letters (even q) edit the term instead of acting as commands.
    async fn test_search_mode_captures_keys() {
        let mut app = app_with_quote("A", "B");
        app.handle_key(KeyCode::Char('/'));
        assert_eq!(app.state().input_mode(), InputMode::Search);

        for c in ['q', 'u', 'x'] {
            assert_eq!(app.handle_key(KeyCode::Char(c)), KeyOutcome::Continue);
        }
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.state().controller.search_term(), "qu");

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.state().input_mode(), InputMode::Normal);
        assert_eq!(app.handle_key(KeyCode::Char('q')), KeyOutcome::Quit);
    }

    #[tokio::test]
    async fn test_splash_skips_on_any_key() {
        let mut app = app_with_quote("A", "B");
        app.current_screen = Screen::Splash;
        assert_eq!(app.handle_key(KeyCode::Enter), KeyOutcome::Continue);
        assert_eq!(app.current_screen(), Screen::Dashboard);
    }

    #[tokio::test]
    // Unliking the quote under the cursor at the end of the list pulls the cursor up.
    async fn test_unlike_last_row_clamps_selection() {
        let store = MemoryStore::new();
        store
            .set(
                LIKES_KEY,
                r#"[{"quote":"one","author":"a"},{"quote":"two","author":"b"},{"quote":"three","author":"c"}]"#,
            )
            .unwrap();
        let mut provider = MockQuoteProvider::new();
        provider
            .expect_random_quote()
            .returning(|| Ok(Quote::new("three", "c")));
        let controller = DashboardController::new(Arc::new(provider), Box::new(store));
        let state = DashboardState::new(controller, "http://test".to_string(), Instant::now(), false);
        let mut app = App::new(state);
        app.show_dashboard();

        app.handle_key(KeyCode::Char('n'));
        wait_for_fetch(&mut app).await;
        assert!(app.state().controller.is_current_quote_liked());

        app.handle_key(KeyCode::Char('j'));
        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.state().selected(), 2);

        app.handle_key(KeyCode::Char('l'));
        assert_eq!(app.state().controller.liked_quotes().len(), 2);
        assert_eq!(app.state().selected(), 1);
        assert_eq!(app.state().selected_quote().unwrap().quote, "two");
    }
}
