//! Configuration: platform paths and the optional `config.toml`
//!
//! ```toml
//! [words]
//! url = "https://example.com/main.js"
//! cache_path = "/tmp/words.txt"
//!
//! [logging]
//! level = "debug"
//! file = "/tmp/wordle_game.log"
//! ```
//!
//! Every key is optional; unknown keys are ignored.

use crate::error::ConfigError;
use crate::wordlists::DEFAULT_WORDS_URL;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Identifier used for platform directories
pub const APP_ID: &str = "wordle_game";

/// File name of the word cache inside the data directory
pub const CACHE_FILE_NAME: &str = "words.txt";

/// File name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Platform-appropriate directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve XDG / AppData / Library directories
    ///
    /// Returns `None` when no home directory can be determined.
    #[must_use]
    pub fn from_project_dirs() -> Option<Self> {
        ProjectDirs::from("", "", APP_ID).map(|dirs| Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Fallback rooted at the working directory
    #[must_use]
    pub fn current_dir() -> Self {
        Self {
            config_dir: PathBuf::from("."),
            data_dir: PathBuf::from("."),
        }
    }

    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    #[must_use]
    pub fn default_cache(&self) -> PathBuf {
        self.data_dir.join(CACHE_FILE_NAME)
    }
}

/// Raw shape of `config.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub words: WordsSection,
    pub logging: LoggingSection,
}

/// `[words]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WordsSection {
    /// Where to fetch the word bundle on a cold cache
    pub url: Option<String>,
    /// Override for the cache file location
    pub cache_path: Option<PathBuf>,
}

/// `[logging]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `EnvFilter` directive, e.g. "info" or "wordle_game=debug"
    pub level: Option<String>,
    /// Write logs here instead of the default destination
    pub file: Option<PathBuf>,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub words_url: String,
    pub cache_path: PathBuf,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Read `path` if it exists and fill gaps from defaults
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path, paths: &PlatformPaths) -> Result<Self, ConfigError> {
        let raw: RawConfig = match fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => RawConfig::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Ok(Self::from_raw(raw, paths))
    }

    #[must_use]
    pub fn from_raw(raw: RawConfig, paths: &PlatformPaths) -> Self {
        Self {
            words_url: raw
                .words
                .url
                .unwrap_or_else(|| DEFAULT_WORDS_URL.to_string()),
            cache_path: raw
                .words
                .cache_path
                .unwrap_or_else(|| paths.default_cache()),
            log_level: raw.logging.level,
            log_file: raw.logging.file,
        }
    }
}
