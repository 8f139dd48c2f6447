//! TUI application state and logic

use crate::commands::{Mode, Scheme, TextOptions};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

const MAX_MESSAGES: usize = 5;
const MAX_HISTORY: usize = 20;

/// Application state
pub struct App {
    pub schemes: Vec<Scheme>,
    pub selected: usize,
    pub mode: Mode,
    pub options: TextOptions,
    pub input: String,
    pub output: String,
    pub error: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// A transcoding the user pinned with Enter
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub scheme: String,
    pub mode: Mode,
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Start on `initial`, which is added to the list if `Scheme::all` lacks it
    #[must_use]
    pub fn new(initial: Scheme, options: TextOptions) -> Self {
        let mut schemes = Scheme::all();
        let label = initial.to_string();
        let selected = schemes
            .iter()
            .position(|s| s.to_string() == label)
            .unwrap_or_else(|| {
                schemes.push(initial);
                schemes.len() - 1
            });

        let mut app = Self {
            schemes,
            selected,
            mode: Mode::Encode,
            options,
            input: String::new(),
            output: String::new(),
            error: None,
            history: Vec::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type to transcode. Up/Down picks a scheme, Tab flips direction.",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.schemes[self.selected]
    }

    /// Re-run the current scheme over the input
    pub fn refresh(&mut self) {
        if self.input.trim().is_empty() {
            self.output.clear();
            self.error = None;
            return;
        }
        match self.scheme().transcode(&self.options, self.mode, &self.input) {
            Ok(output) => {
                self.output = output;
                self.error = None;
            }
            Err(e) => {
                debug!(scheme = %self.scheme(), mode = %self.mode, error = %e, "transcode failed");
                self.output.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.refresh();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.refresh();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.refresh();
    }

    pub fn next_scheme(&mut self) {
        self.selected = (self.selected + 1) % self.schemes.len();
        self.refresh();
    }

    pub fn previous_scheme(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.schemes.len() - 1);
        self.refresh();
    }

    /// Flip direction, carrying a successful output over as the new input
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if self.error.is_none() && !self.output.is_empty() {
            self.input = std::mem::take(&mut self.output);
        }
        self.refresh();
        let text = format!("Now {}ing with {}", self.mode, self.scheme());
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn toggle_punctuation(&mut self) {
        self.options.keep_punctuation = !self.options.keep_punctuation;
        self.refresh();
        let text = if self.options.keep_punctuation {
            "Keeping punctuation"
        } else {
            "Dropping punctuation"
        };
        self.add_message(text, MessageStyle::Info);
    }

    /// Pin the current result to the history list
    pub fn commit(&mut self) {
        if let Some(error) = self.error.clone() {
            self.add_message(&error, MessageStyle::Error);
            return;
        }
        if self.output.is_empty() {
            self.add_message("Nothing to keep", MessageStyle::Error);
            return;
        }
        self.history.push(HistoryEntry {
            scheme: self.scheme().to_string(),
            mode: self.mode,
            input: self.input.clone(),
            output: self.output.clone(),
        });
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.add_message("Saved to history", MessageStyle::Success);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.clear_input(),
            KeyCode::Char('p') if ctrl => self.toggle_punctuation(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_mode(),
            KeyCode::Up => self.previous_scheme(),
            KeyCode::Down => self.next_scheme(),
            KeyCode::Enter => self.commit(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if !ctrl => self.push_char(c),
            _ => {}
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.refresh();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
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

    fn new_app(name: &str) -> App {
        App::new(Scheme::parse(name).unwrap(), TextOptions::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_on_requested_scheme() {
        let app = new_app("semaphore:rogue");
        assert_eq!(app.scheme().to_string(), "semaphore:rogue");
        assert_eq!(app.mode, Mode::Encode);
    }

    #[test]
    fn alphabet_is_appended_when_requested() {
        let app = new_app("alphabet");
        assert_eq!(app.scheme().to_string(), "alphabet");
        assert_eq!(app.selected, app.schemes.len() - 1);
    }

    #[test]
    fn typing_updates_output() {
        let mut app = new_app("morse");
        type_str(&mut app, "sos");
        assert_eq!(app.output, "... --- ...");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.output, "... ---");
    }

    #[test]
    fn tab_carries_output_back_as_input() {
        let mut app = new_app("morse");
        type_str(&mut app, "hi");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Decode);
        assert_eq!(app.input, ".... ..");
        assert_eq!(app.output, "HI");
    }

    #[test]
    fn decode_errors_are_reported() {
        let mut app = new_app("morse");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "........");
        assert!(app.error.is_some());
        assert!(app.output.is_empty());
        press(&mut app, KeyCode::Enter);
        assert!(app.history.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn scheme_selection_wraps() {
        let mut app = new_app("amino");
        let len = app.schemes.len();
        app.selected = 0;
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, len - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn enter_saves_history() {
        let mut app = new_app("morse");
        type_str(&mut app, "e");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].output, ".");
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app("morse");
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "5");
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app("morse");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = new_app("morse");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
