//! Wordle
//!
//! A terminal word-guessing game: six tries to find a hidden five-letter word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, SubmitOutcome};
//! use wordle_game::wordlists::WordList;
//!
//! let words = WordList::from_words(["cigar", "rebut", "aahed"]).unwrap();
//! let mut game = Game::new(Word::new("cigar").unwrap());
//!
//! for c in "rebut".chars() {
//!     game.input_letter(c);
//! }
//! assert!(matches!(game.submit(&words), SubmitOutcome::Accepted { .. }));
//! ```

// Core domain types
pub mod core;

// Grid, focus and turn controller
pub mod game;

// Word list acquisition
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Settings and platform paths
pub mod config;

// Error types
pub mod error;

// Tracing subscriber setup
pub mod logging;
