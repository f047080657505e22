//! Word list acquisition
//!
//! Fetches the dictionary once, caches it on disk, and validates it.

pub mod loader;
pub mod source;

pub use loader::{ALLOWED_SENTINEL, ANSWERS_SENTINEL, WordList, extract_word_lists};
pub use source::{DEFAULT_WORDS_URL, HttpSource, WordSource};
