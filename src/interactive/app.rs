//! TUI application state and logic
//!
//! Key presses become [`AppEvent`]s, events are applied to the game session,
//! and the screen is redrawn from the resulting state.

use crate::core::Rejection;
use crate::dictionary::Dictionary;
use crate::game::GameSession;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Modal error dialog shown after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn from_rejection(reason: Rejection, root_word: &str) -> Self {
        Self {
            title: reason.title().to_string(),
            message: reason.message(root_word),
        }
    }
}

/// Everything the UI can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Type(char),
    Backspace,
    Submit,
    Dismiss,
    Restart,
    Quit,
}

impl AppEvent {
    /// Translate a key press
    ///
    /// While an alert is open only dismissing it (Enter/Esc) and Ctrl+C do
    /// anything.
    #[must_use]
    pub fn from_key(key: KeyEvent, alert_open: bool) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => Some(Self::Quit),
            KeyCode::Enter | KeyCode::Esc if alert_open => Some(Self::Dismiss),
            _ if alert_open => None,
            KeyCode::Char('r') if ctrl => Some(Self::Restart),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Self::Type(c)),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Enter => Some(Self::Submit),
            KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Totals across the rounds of this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub total_words: u32,
    pub best_score: u32,
}

/// Application state
pub struct App<'a, D: Dictionary> {
    pub session: GameSession<D>,
    corpus: &'a [String],
    rng: StdRng,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a, D: Dictionary> App<'a, D> {
    /// Create the app and start the first round
    #[must_use]
    pub fn new(session: GameSession<D>, corpus: &'a [String], rng: StdRng) -> Self {
        let mut app = Self {
            session,
            corpus,
            rng,
            input_buffer: String::new(),
            alert: None,
            stats: Statistics::default(),
            should_quit: false,
        };
        app.new_game();
        app
    }

    /// Apply one event
    pub fn update(&mut self, event: AppEvent) {
        if self.alert.is_some() {
            match event {
                AppEvent::Dismiss => self.alert = None,
                AppEvent::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Type(c) => self.input_buffer.push(c),
            AppEvent::Backspace => {
                self.input_buffer.pop();
            }
            AppEvent::Submit => self.submit_input(),
            AppEvent::Restart => self.new_game(),
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Dismiss => {}
        }
    }

    /// Start a new round with a fresh root word
    pub fn new_game(&mut self) {
        let root_word = self.session.start_game_with_rng(self.corpus, &mut self.rng);
        info!(root_word, "new round");

        self.input_buffer.clear();
        self.alert = None;
        self.stats.rounds_played += 1;
    }

    fn submit_input(&mut self) {
        // Blank input is ignored rather than reported
        if self.input_buffer.trim().is_empty() {
            return;
        }

        match self.session.submit(&self.input_buffer).rejection() {
            None => {
                self.input_buffer.clear();
                self.stats.total_words += 1;
                self.stats.best_score = self.stats.best_score.max(self.session.score());
            }
            Some(reason) => {
                debug!(?reason, "showing rejection");
                self.alert = Some(Alert::from_rejection(reason, self.session.root_word()));
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, D>(terminal: &mut Terminal<B>, mut app: App<'_, D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(app_event) = AppEvent::from_key(key, app.alert.is_some()) {
                app.update(app_event);
            }
        }

        if app.should_quit {
            info!(
                rounds = app.stats.rounds_played,
                words = app.stats.total_words,
                "quitting"
            );
            break;
        }
    }

    Ok(())
}
