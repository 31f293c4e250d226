//! TUI application state and logic

use crate::core::{LetterState, WORD_LENGTH};
use crate::filter::{Engine, LetterBoard, MatchResult, ToggleOutcome};
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

/// On-screen keyboard layout
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Application state
pub struct App<'a> {
    pub engine: Engine<'a>,
    pub board: LetterBoard,
    pub results: MatchResult<'a>,
    pub input_mode: InputMode,
    pub selected_slot: usize,
    pub keyboard_expanded: bool,
    pub messages: Vec<Message>,
    /// Help panel shown in place of the results
    pub show_help: bool,
    pub should_quit: bool,
}

/// Where typed letters go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letters fill the selected pattern box
    Pattern,
    /// Letters cycle their keyboard state
    Keyboard,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: Engine<'a>) -> Self {
        Self {
            engine,
            board: LetterBoard::new(),
            results: MatchResult::default(),
            input_mode: InputMode::Pattern,
            selected_slot: 0,
            keyboard_expanded: true,
            messages: vec![
                Message {
                    text: "Type letters into the pattern boxes (? for unknown).".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB switches to the keyboard: tap once to exclude, twice to include."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "F1 shows how to use the helper.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            show_help: false,
            should_quit: false,
        }
    }

    /// Re-run the query for the current board
    pub fn refresh(&mut self) {
        self.results = self.engine.query_board(&self.board);
    }

    /// Pin a letter in the selected box and move to the next box
    pub fn type_letter(&mut self, c: char) {
        if self.board.set_slot(self.selected_slot, c) {
            self.advance_selection();
            self.refresh();
        }
    }

    /// Clear the selected box and move to the next box
    pub fn type_wildcard(&mut self) {
        self.board.clear_slot(self.selected_slot);
        self.advance_selection();
        self.refresh();
    }

    /// Clear the selected box, or step back and clear the previous one if empty
    pub fn backspace(&mut self) {
        if self.board.pattern().slot(self.selected_slot).is_none() && self.selected_slot > 0 {
            self.selected_slot -= 1;
        }
        self.board.clear_slot(self.selected_slot);
        self.refresh();
    }

    /// Clear the selected box without moving
    pub fn delete(&mut self) {
        self.board.clear_slot(self.selected_slot);
        self.refresh();
    }

    pub fn move_selection(&mut self, forward: bool) {
        self.selected_slot = if forward {
            (self.selected_slot + 1).min(WORD_LENGTH - 1)
        } else {
            self.selected_slot.saturating_sub(1)
        };
    }

    fn advance_selection(&mut self) {
        self.move_selection(true);
    }

    /// Cycle a letter's keyboard state
    pub fn toggle_letter(&mut self, c: char) {
        match self.board.toggle(c) {
            ToggleOutcome::Changed(state) => {
                let text = match state {
                    LetterState::Neutral => format!("{} cleared", c.to_ascii_uppercase()),
                    LetterState::Excluded => format!("{} excluded", c.to_ascii_uppercase()),
                    LetterState::Included => format!("{} included", c.to_ascii_uppercase()),
                };
                self.add_message(&text, MessageStyle::Info);
                self.refresh();
            }
            ToggleOutcome::Pinned => self.add_message(
                &format!("{} is locked by the pattern", c.to_ascii_uppercase()),
                MessageStyle::Error,
            ),
            ToggleOutcome::Ignored => {}
        }
    }

    /// Forget the pattern and every letter state
    pub fn clear_all(&mut self) {
        self.board.clear();
        self.selected_slot = 0;
        self.keyboard_expanded = true;
        self.input_mode = InputMode::Pattern;
        self.refresh();
        self.add_message("Cleared. Start a new puzzle.", MessageStyle::Success);
    }

    pub fn switch_mode(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Pattern => {
                self.keyboard_expanded = true;
                InputMode::Keyboard
            }
            InputMode::Keyboard => InputMode::Pattern,
        };
    }

    pub fn toggle_keyboard(&mut self) {
        self.keyboard_expanded = !self.keyboard_expanded;
        if !self.keyboard_expanded && self.input_mode == InputMode::Keyboard {
            self.input_mode = InputMode::Pattern;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// True while the user has entered neither a pattern nor any letter state
    #[must_use]
    pub fn nothing_entered(&self) -> bool {
        self.board.is_blank()
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.clear_all(),
            KeyCode::Char('k') if ctrl => self.toggle_keyboard(),
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_mode(),
            _ => match self.input_mode {
                InputMode::Pattern => self.handle_pattern_key(key.code),
                InputMode::Keyboard => self.handle_keyboard_key(key.code),
            },
        }
    }

    fn handle_pattern_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.move_selection(false),
            KeyCode::Right => self.move_selection(true),
            KeyCode::Home => self.selected_slot = 0,
            KeyCode::End => self.selected_slot = WORD_LENGTH - 1,
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char('?' | ' ') => self.type_wildcard(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            _ => {}
        }
    }

    fn handle_keyboard_key(&mut self, code: KeyCode) {
        if let KeyCode::Char(c) = code
            && c.is_ascii_alphabetic()
        {
            self.toggle_letter(c);
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
    // stderr shares the terminal with the alternate screen
    let log_pause = LogPause::new();

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

    drop(log_pause);
    if let Err(err) = &res {
        log::error!("TUI exited with error: {err}");
    }

    res
}

/// Silences the logger until dropped, then restores the previous level
struct LogPause(log::LevelFilter);

impl LogPause {
    fn new() -> Self {
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        Self(level)
    }
}

impl Drop for LogPause {
    fn drop(&mut self) {
        log::set_max_level(self.0);
    }
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
