//! Guess evaluation and feedback representation
//!
//! Each letter of a guess is classified against the target:
//! - `Exact`: same letter in the same position
//! - `Present`: letter appears somewhere in the target
//! - `Absent`: letter does not appear in the target
//!
//! `Present` does not consume letters from the target. A guess with a
//! repeated letter marks every copy present as long as the target contains
//! that letter at least once.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Exact,
    Present,
    Absent,
}

impl LetterState {
    /// Emoji square for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LEN]);

impl Feedback {
    /// Every letter in the right place
    pub const SOLVED: Self = Self([LetterState::Exact; WORD_LEN]);

    /// Evaluate `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("cigar").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.states()[0], LetterState::Exact);   // c
    /// assert_eq!(feedback.states()[1], LetterState::Present); // r
    /// assert_eq!(feedback.states()[4], LetterState::Absent);  // e
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        if guess == target {
            return Self::SOLVED;
        }

        let mut states = [LetterState::Absent; WORD_LEN];
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            states[i] = if g == t {
                LetterState::Exact
            } else if target.has_letter(g) {
                LetterState::Present
            } else {
                LetterState::Absent
            };
        }

        Self(states)
    }

    /// Letter states in position order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LEN] {
        &self.0
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Render as a row of emoji squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
