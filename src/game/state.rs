//! Turn controller
//!
//! `Game` owns the target, grid and focus for a single round and applies
//! player actions to them. Front ends draw from its accessors and never
//! mutate the grid directly.

use super::grid::{Focus, Grid, MAX_ROWS};
use crate::core::{Feedback, Word};
use crate::wordlists::WordList;
use tracing::debug;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Typing into the current row
    EnteringLetter,
    /// Current row is full and can be submitted
    RowComplete,
    /// Target guessed
    Won,
    /// Last row used without guessing the target
    Lost,
}

impl TurnState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The row matched the target
    Won { guesses: usize },
    /// A valid word; focus moved to the next row
    Accepted { feedback: Feedback },
    /// A valid word on the last row; the round is over
    Lost { target: Word },
    /// Not in the dictionary; row left editable
    NotAWord { word: String },
    /// The row is not full yet
    Incomplete,
    /// The round already ended
    GameOver,
}

/// A single round of play
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    grid: Grid,
    focus: Focus,
    finished: Option<TurnState>,
}

impl Game {
    #[must_use]
    pub fn new(target: Word) -> Self {
        debug!("New game started");
        Self {
            target,
            grid: Grid::new(),
            focus: Focus::default(),
            finished: None,
        }
    }

    /// Start over with a fresh target
    pub fn restart(&mut self, target: Word) {
        *self = Self::new(target);
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// The hidden word; front ends reveal it only once the round is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        if let Some(state) = self.finished {
            state
        } else if self.is_row_full() {
            TurnState::RowComplete
        } else {
            TurnState::EnteringLetter
        }
    }

    /// Number of rows submitted as valid words
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        (0..MAX_ROWS)
            .filter(|&row| self.grid.feedback(row).is_some())
            .count()
    }

    fn is_row_full(&self) -> bool {
        self.focus.is_last_col() && self.grid.cell(self.focus.col, self.focus.row).is_some()
    }

    /// Type a letter into the focused cell and advance
    ///
    /// Non-letters are ignored. On the last column the letter replaces the
    /// existing one and focus stays put.
    pub fn input_letter(&mut self, letter: char) {
        if self.finished.is_some() || !letter.is_ascii_alphabetic() {
            return;
        }

        self.grid.set(self.focus, letter.to_ascii_uppercase());
        self.focus = self.focus.advanced();
    }

    /// Clear the focused cell, first stepping back if it is already empty
    pub fn backspace(&mut self) {
        if self.finished.is_some() {
            return;
        }

        if self.grid.cell(self.focus.col, self.focus.row).is_none() {
            self.focus = self.focus.retreated();
        }
        self.grid.clear(self.focus);
    }

    /// Submit the current row against the dictionary and the target
    pub fn submit(&mut self, words: &WordList) -> SubmitOutcome {
        if self.finished.is_some() {
            return SubmitOutcome::GameOver;
        }
        if !self.is_row_full() {
            return SubmitOutcome::Incomplete;
        }

        let row = self.focus.row;
        let text = self.grid.row_word(row);
        let Some(guess) = Word::new(&text).ok().filter(|w| words.contains(w)) else {
            debug!(word = %text, "Rejected guess");
            return SubmitOutcome::NotAWord { word: text };
        };

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.grid.set_feedback(row, feedback);
        debug!(row, feedback = %feedback, "Row submitted");

        if feedback.is_solved() {
            self.finished = Some(TurnState::Won);
            SubmitOutcome::Won { guesses: row + 1 }
        } else if row + 1 < MAX_ROWS {
            self.focus = Focus::new(0, row + 1);
            SubmitOutcome::Accepted { feedback }
        } else {
            self.finished = Some(TurnState::Lost);
            SubmitOutcome::Lost {
                target: self.target.clone(),
            }
        }
    }
}
