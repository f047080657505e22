//! Error types for word-list acquisition and configuration.

use std::io;
use std::path::PathBuf;

/// Errors while fetching, parsing, caching or validating the word list.
///
/// Every variant is fatal to startup; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// Request could not be sent or the body could not be read.
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Reading or writing the cache file failed.
    #[error("I/O error during {operation} on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// An embedded array starting with `first_word` was not found.
    #[error("word array starting with \"{first_word}\" not found in fetched content")]
    MissingArray { first_word: &'static str },

    /// An embedded array was found but is not a JSON list of strings.
    #[error("malformed word array starting with \"{first_word}\": {source}")]
    Parse {
        first_word: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An entry is not a five-letter lowercase word.
    #[error("invalid word \"{word}\" at index {index}")]
    InvalidWord { word: String, index: usize },

    /// No words at all.
    #[error("word list is empty")]
    Empty,

    /// First entry differs from the expected sentinel.
    #[error("word list sanity check failed: expected first word \"{expected}\", found \"{found}\"")]
    SentinelMismatch {
        expected: &'static str,
        found: String,
    },
}

/// Errors while loading `config.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
