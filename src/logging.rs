//! Logging setup
//!
//! Filter priority: `RUST_LOG` > `--debug` > config `[logging] level` > "info".
//! Line mode logs to stderr. The TUI owns the terminal, so it logs to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name of the log inside the data directory
pub const LOG_FILE_NAME: &str = "wordle_game.log";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// Pick the destination for a front end
    ///
    /// A configured file always wins. Otherwise a front end that owns the
    /// terminal logs to `data_dir`, and everything else uses stderr.
    #[must_use]
    pub fn select(owns_terminal: bool, configured: Option<&Path>, data_dir: &Path) -> Self {
        match configured {
            Some(path) => Self::File(path.to_path_buf()),
            None if owns_terminal => Self::File(data_dir.join(LOG_FILE_NAME)),
            None => Self::Stderr,
        }
    }
}

/// Choose the filter directive without touching the global subscriber
#[must_use]
pub fn filter_directive(
    env_set: bool,
    debug_flag: bool,
    config_level: Option<&str>,
) -> Option<String> {
    if env_set {
        None
    } else if debug_flag {
        Some("debug".to_string())
    } else {
        Some(config_level.unwrap_or(DEFAULT_LOG_LEVEL).to_string())
    }
}

/// Open `path` for appending, creating its directory if needed
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn make_writer(target: &LogTarget) -> io::Result<BoxMakeWriter> {
    Ok(match target {
        LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        LogTarget::File(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
    })
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are no-ops.
///
/// # Errors
/// Returns an I/O error if the log file cannot be opened.
pub fn init(debug_flag: bool, config_level: Option<&str>, target: &LogTarget) -> io::Result<()> {
    let env_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let filter = match filter_directive(env_set, debug_flag, config_level) {
        None => EnvFilter::from_default_env(),
        Some(directive) => EnvFilter::new(directive),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer(target)?)
        .with_ansi(matches!(target, LogTarget::Stderr))
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), ?target, "Logging initialised");
    }
    Ok(())
}
