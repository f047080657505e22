//! TUI application state and event loop

use crate::core::Word;
use crate::game::{Game, SubmitOutcome};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub game: Game,
    /// Modal message; while shown, the next key only dismisses it
    pub popup: Option<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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
    /// Start with a random target from the answers
    #[must_use]
    pub fn new(words: &'a WordList) -> Self {
        let target = words.random_answer(&mut rand::rng()).clone();
        Self::with_target(words, target)
    }

    #[must_use]
    pub fn with_target(words: &'a WordList, target: Word) -> Self {
        Self {
            words,
            game: Game::new(target),
            popup: None,
            should_quit: false,
        }
    }

    /// New round with a fresh random target
    pub fn restart(&mut self) {
        let target = self.words.random_answer(&mut rand::rng()).clone();
        self.game.restart(target);
        self.popup = None;
    }

    fn show(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.popup = Some(Message {
            text: text.into(),
            style,
        });
    }

    /// Submit the focused row and surface the outcome
    pub fn submit(&mut self) {
        match self.game.submit(self.words) {
            SubmitOutcome::Won { guesses } => {
                debug!(guesses, "Game won");
                self.show("You did it", MessageStyle::Success);
            }
            SubmitOutcome::Lost { target } => {
                debug!("Game lost");
                self.show(
                    format!("Bad luck today. The word was: {}", target.text().to_uppercase()),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::NotAWord { word } => {
                self.show(format!("'{word}' is not a word!"), MessageStyle::Error);
            }
            SubmitOutcome::Accepted { .. } | SubmitOutcome::Incomplete | SubmitOutcome::GameOver => {}
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.popup.is_some() {
            self.popup = None;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.restart(),
            KeyCode::F(5) => self.restart(),
            // Once the round is over letters are free to act as commands
            KeyCode::Char('n') if self.game.state().is_over() => self.restart(),
            KeyCode::Char('q') if self.game.state().is_over() => self.should_quit = true,
            KeyCode::Backspace => self.game.backspace(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if !ctrl => self.game.input_letter(c),
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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
            debug!("Exiting");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Focus, TurnState};

    fn words() -> WordList {
        WordList::from_words(["cigar", "rebut", "humph", "aahed", "crane"]).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_submitting_a_valid_word() {
        let words = words();
        let mut app = App::with_target(&words, Word::new("cigar").unwrap());

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.popup, None);
        assert_eq!(app.game.focus(), Focus::new(0, 1));
    }

    #[test]
    fn unknown_word_shows_error_popup_and_keeps_row() {
        let words = words();
        let mut app = App::with_target(&words, Word::new("cigar").unwrap());

        type_word(&mut app, "qwert");
        press(&mut app, KeyCode::Enter);

        let popup = app.popup.clone().unwrap();
        assert_eq!(popup.style, MessageStyle::Error);
        assert_eq!(popup.text, "'qwert' is not a word!");
        assert_eq!(app.game.grid().row_word(0), "qwert");

        // First key dismisses the popup without editing
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.popup, None);
        assert_eq!(app.game.grid().row_word(0), "qwert");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.grid().row_word(0), "qwer");
    }

    #[test]
    fn win_popup_then_new_game() {
        let words = words();
        let mut app = App::with_target(&words, Word::new("cigar").unwrap());

        type_word(&mut app, "cigar");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.state(), TurnState::Won);
        assert_eq!(app.popup.as_ref().unwrap().style, MessageStyle::Success);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game.state(), TurnState::EnteringLetter);
        assert!(app.game.grid().is_empty());
    }

    #[test]
    fn loss_reveals_target() {
        let words = words();
        let mut app = App::with_target(&words, Word::new("cigar").unwrap());

        for _ in 0..crate::game::MAX_ROWS {
            type_word(&mut app, "humph");
            press(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.game.state(), TurnState::Lost);
        assert!(app.popup.as_ref().unwrap().text.contains("CIGAR"));
    }

    #[test]
    fn ctrl_n_restarts_mid_game() {
        let words = words();
        let mut app = App::with_target(&words, Word::new("cigar").unwrap());

        type_word(&mut app, "cr");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(app.game.grid().is_empty());
        assert_eq!(app.game.focus(), Focus::new(0, 0));
    }

    #[test]
    fn letters_q_and_n_are_input_while_playing() {
        let words = words();
        let mut app = App::with_target(&words, Word::new("cigar").unwrap());

        type_word(&mut app, "qn");
        assert!(!app.should_quit);
        assert_eq!(app.game.grid().row_word(0), "qn");
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let words = words();
        let mut app = App::with_target(&words, Word::new("cigar").unwrap());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::with_target(&words, Word::new("cigar").unwrap());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
