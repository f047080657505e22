//! Wordle - CLI
//!
//! Runs the TUI game by default; `simple` plays line by line instead.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::run_simple,
    config::{Config, PlatformPaths},
    logging::{self, LogTarget},
    wordlists::{HttpSource, WordList, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word cache file (default: platform data directory)
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,
}

/// Read the cache, or fetch and cache the word list on first run
fn load_words(cache: &Path, url: &str) -> Result<WordList> {
    let http = HttpSource::new(url);

    let fetch_with_spinner = || {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Fetching word list from {}", http.url()));
        spinner.tick();
        let result = http.fetch();
        spinner.finish_and_clear();
        result
    };

    WordList::load(cache, &fetch_with_spinner)
        .with_context(|| format!("failed to load word list (cache: {})", cache.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    let resolved = PlatformPaths::from_project_dirs();
    let found_dirs = resolved.is_some();
    let paths = resolved.unwrap_or_else(PlatformPaths::current_dir);
    let config_file = paths.config_file();
    let config = Config::load(&config_file, &paths)
        .with_context(|| format!("invalid configuration in {}", config_file.display()))?;

    let log_target = LogTarget::select(
        matches!(command, Commands::Play),
        config.log_file.as_deref(),
        &paths.data_dir,
    );
    logging::init(cli.debug, config.log_level.as_deref(), &log_target)
        .context("failed to open log file")?;

    if found_dirs {
        tracing::debug!(
            config = %paths.config_dir.display(),
            data = %paths.data_dir.display(),
            "Platform paths resolved"
        );
    } else {
        tracing::warn!("Could not determine platform directories, using current directory");
    }

    let cache = cli.cache.unwrap_or(config.cache_path);
    let words = load_words(&cache, &config.words_url)?;

    match command {
        Commands::Play => run_play_command(&words),
        Commands::Simple => run_simple(&words),
    }
}

fn run_play_command(words: &WordList) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}
