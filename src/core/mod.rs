//! Core domain types for Wordle
//!
//! Pure types with no I/O: validated words and guess feedback.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterState};
pub use word::{WORD_LEN, Word, WordError};
