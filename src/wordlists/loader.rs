//! Word list loading and caching
//!
//! Resolution order:
//! 1. If the cache file exists, read it.
//! 2. Otherwise fetch the raw content from a [`WordSource`], extract the two
//!    embedded arrays and, once they validate, write them to the cache.
//!
//! Either way the result must start with [`ANSWERS_SENTINEL`].

use super::source::WordSource;
use crate::core::Word;
use crate::error::WordListError;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Expected first word of the answers array
pub const ANSWERS_SENTINEL: &str = "cigar";

/// Expected first word of the allowed-only array
pub const ALLOWED_SENTINEL: &str = "aahed";

/// Dictionary of valid guesses, with the target-eligible answers first
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    answers_len: usize,
    lookup: FxHashSet<Word>,
}

impl WordList {
    /// Load from `cache_path`, falling back to `source` on a cold cache
    ///
    /// # Errors
    /// Returns `WordListError` if the cache cannot be read or written, the
    /// fetch fails, the content is malformed, or the sanity check fails.
    pub fn load<S: WordSource + ?Sized>(
        cache_path: &Path,
        source: &S,
    ) -> Result<Self, WordListError> {
        let list = if cache_path.is_file() {
            info!(path = %cache_path.display(), "Reading from cached words");
            Self::from_words(read_cache(cache_path)?)?
        } else {
            let content = source.fetch()?;
            let words = extract_word_lists(&content)?;
            // Only a list that passed validation may reach the cache
            let list = Self::from_words(&words)?;
            write_cache(cache_path, &words)?;
            list
        };

        info!(
            words = list.len(),
            answers = list.answers().len(),
            "First word is as expected - words loaded"
        );
        Ok(list)
    }

    /// Build and validate a word list from raw entries
    ///
    /// The answers segment runs up to the first [`ALLOWED_SENTINEL`]; if that
    /// word is absent every entry is an answer.
    ///
    /// # Errors
    /// Returns `WordListError` if the list is empty, any entry is not a
    /// five-letter lowercase word, or the first entry is not
    /// [`ANSWERS_SENTINEL`].
    pub fn from_words<I, T>(raw: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut words = Vec::new();
        for (index, entry) in raw.into_iter().enumerate() {
            let entry = entry.as_ref();
            // Word::new lowercases, the cache must already be lowercase
            let word = Word::new(entry)
                .ok()
                .filter(|w| w.text() == entry)
                .ok_or_else(|| WordListError::InvalidWord {
                    word: entry.to_string(),
                    index,
                })?;
            words.push(word);
        }

        let first = words.first().ok_or(WordListError::Empty)?;
        if first.text() != ANSWERS_SENTINEL {
            return Err(WordListError::SentinelMismatch {
                expected: ANSWERS_SENTINEL,
                found: first.text().to_string(),
            });
        }

        let answers_len = words
            .iter()
            .position(|w| w.text() == ALLOWED_SENTINEL)
            .unwrap_or(words.len());
        let lookup = words.iter().cloned().collect();

        Ok(Self {
            words,
            answers_len,
            lookup,
        })
    }

    /// Check whether `word` is a valid guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// All valid guesses, answers first
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words eligible as targets
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.words[..self.answers_len]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a target uniformly from the answers
    pub fn random_answer<R: Rng>(&self, rng: &mut R) -> &Word {
        // answers_len >= 1: the sentinel answer is always at index 0
        &self.words[rng.random_range(0..self.answers_len)]
    }
}

/// Pull the answers and allowed-only arrays out of the fetched bundle
///
/// Each array is located by its opening `["<sentinel>"` and runs to the next
/// `]`. The result is answers followed by allowed-only words.
///
/// # Errors
/// Returns `WordListError::MissingArray` if either array is not present and
/// `WordListError::Parse` if one is not a JSON list of strings.
pub fn extract_word_lists(content: &str) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();

    for first_word in [ANSWERS_SENTINEL, ALLOWED_SENTINEL] {
        let missing = || WordListError::MissingArray { first_word };

        let start = content
            .find(&format!("[\"{first_word}\""))
            .ok_or_else(missing)?;
        let end = content[start..].find(']').ok_or_else(missing)? + start + 1;

        let array: Vec<String> = serde_json::from_str(&content[start..end])
            .map_err(|source| WordListError::Parse { first_word, source })?;
        debug!(first_word, count = array.len(), "Extracted word array");

        words.extend(array);
    }

    Ok(words)
}

fn read_cache(path: &Path) -> Result<Vec<String>, WordListError> {
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        operation: "read cache",
        source,
    })?;

    Ok(content.split_whitespace().map(str::to_string).collect())
}

fn write_cache(path: &Path, words: &[String]) -> Result<(), WordListError> {
    let io_err = |operation, source| WordListError::Io {
        path: path.to_path_buf(),
        operation,
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_err("create cache directory", e))?;
    }
    fs::write(path, words.join(" ")).map_err(|e| io_err("write cache", e))?;

    info!(path = %path.display(), words = words.len(), "Word list cached");
    Ok(())
}
