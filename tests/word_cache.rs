//! End-to-end tests for word list acquisition and a full round of play.
//!
//! These exercise the real cache file on disk. The network is replaced by a
//! counting stub source.

use std::cell::Cell;
use std::fs;

use wordle_game::core::Word;
use wordle_game::error::WordListError;
use wordle_game::game::{Focus, Game, MAX_ROWS, SubmitOutcome, TurnState};
use wordle_game::wordlists::{WordList, WordSource};

const BUNDLE: &str = concat!(
    r#"!function(){var Ma=["cigar","rebut","sissy","humph","awake"],"#,
    r#"Oa=["aahed","aalii","aargh","crane","bumpy"],Ra="abcdefghijklmnopqrstuvwxyz";}();"#,
);

/// Serves fixed content and counts how often it was asked
struct StubSource {
    content: Result<&'static str, u16>,
    calls: Cell<usize>,
}

impl StubSource {
    fn ok(content: &'static str) -> Self {
        Self {
            content: Ok(content),
            calls: Cell::new(0),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            content: Err(status),
            calls: Cell::new(0),
        }
    }
}

impl WordSource for StubSource {
    fn fetch(&self) -> Result<String, WordListError> {
        self.calls.set(self.calls.get() + 1);
        self.content
            .map(str::to_string)
            .map_err(|status| WordListError::HttpStatus {
                url: "http://stub".to_string(),
                status,
            })
    }
}

// =============================================================================
// Loader
// =============================================================================

#[test]
fn cold_cache_fetches_once_and_writes_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("nested").join("words.txt");
    let source = StubSource::ok(BUNDLE);

    let words = WordList::load(&cache, &source).unwrap();
    assert_eq!(source.calls.get(), 1);
    assert_eq!(words.len(), 10);
    assert_eq!(words.answers().len(), 5);
    assert!(words.words().iter().all(|w| w.text().len() == 5));

    let cached = fs::read_to_string(&cache).unwrap();
    assert!(cached.starts_with("cigar rebut"));
    assert_eq!(cached.split_whitespace().count(), 10);
}

#[test]
fn warm_cache_skips_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("words.txt");
    fs::write(&cache, "cigar rebut\nsissy aahed\n").unwrap();
    let source = StubSource::failing(500);

    let words = WordList::load(&cache, &source).unwrap();
    assert_eq!(source.calls.get(), 0);
    assert_eq!(words.len(), 4);
    assert_eq!(words.answers().len(), 3);
}

#[test]
fn cached_list_matches_fetched_list() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("words.txt");

    let fetched = WordList::load(&cache, &StubSource::ok(BUNDLE)).unwrap();
    let cached = WordList::load(&cache, &StubSource::failing(500)).unwrap();

    assert_eq!(fetched.words(), cached.words());
    assert_eq!(fetched.answers(), cached.answers());
}

#[test]
fn fetch_failure_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("words.txt");

    let err = WordList::load(&cache, &StubSource::failing(404)).unwrap_err();
    assert!(matches!(err, WordListError::HttpStatus { status: 404, .. }));
    assert!(!cache.exists());
}

#[test]
fn corrupted_cache_fails_sanity_check() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("words.txt");
    fs::write(&cache, "rebut cigar").unwrap();

    let err = WordList::load(&cache, &StubSource::ok(BUNDLE)).unwrap_err();
    assert!(matches!(err, WordListError::SentinelMismatch { .. }));
}

#[test]
fn bundle_without_arrays_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("words.txt");

    let err = WordList::load(&cache, &StubSource::ok("<html>moved</html>")).unwrap_err();
    assert!(matches!(err, WordListError::MissingArray { .. }));
    assert!(!cache.exists());
}

#[test]
fn invalid_fetched_list_is_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("words.txt");
    let bad = StubSource::ok(r#"a=["cigar","rebut"],b=["aahed","Xx"]"#);

    let err = WordList::load(&cache, &bad).unwrap_err();
    assert!(matches!(err, WordListError::InvalidWord { index: 3, .. }));
    assert!(!cache.exists());

    // The next run fetches again instead of tripping over a bad cache
    let good = StubSource::ok(BUNDLE);
    let words = WordList::load(&cache, &good).unwrap();
    assert_eq!(good.calls.get(), 1);
    assert_eq!(words.len(), 10);
    assert!(cache.exists());
}

// =============================================================================
// Full round
// =============================================================================

const BUNDLE_WORDS: [&str; 10] = [
    "cigar", "rebut", "sissy", "humph", "awake", "aahed", "aalii", "aargh", "crane", "bumpy",
];

fn enter(game: &mut Game, word: &str) -> SubmitOutcome {
    let words = WordList::from_words(BUNDLE_WORDS).unwrap();
    for c in word.chars() {
        game.input_letter(c);
    }
    game.submit(&words)
}

#[test]
fn round_with_rejection_then_win() {
    let mut game = Game::new(Word::new("awake").unwrap());

    assert!(matches!(enter(&mut game, "crane"), SubmitOutcome::Accepted { .. }));
    assert_eq!(game.focus(), Focus::new(0, 1));

    // Rejected word stays in the row; clear it before retyping
    assert!(matches!(enter(&mut game, "zzzzz"), SubmitOutcome::NotAWord { .. }));
    assert_eq!(game.focus().row, 1);
    for _ in 0..5 {
        game.backspace();
    }
    assert_eq!(game.focus(), Focus::new(0, 1));

    assert_eq!(enter(&mut game, "awake"), SubmitOutcome::Won { guesses: 2 });
    assert_eq!(game.state(), TurnState::Won);
}

#[test]
fn round_lost_then_restart() {
    let mut game = Game::new(Word::new("awake").unwrap());

    for _ in 0..MAX_ROWS - 1 {
        assert!(matches!(enter(&mut game, "bumpy"), SubmitOutcome::Accepted { .. }));
    }
    assert_eq!(
        enter(&mut game, "humph"),
        SubmitOutcome::Lost {
            target: Word::new("awake").unwrap()
        }
    );

    game.restart(Word::new("cigar").unwrap());
    assert_eq!(game.focus(), Focus::new(0, 0));
    assert!(game.grid().is_empty());
    assert_eq!(game.state(), TurnState::EnteringLetter);
}
