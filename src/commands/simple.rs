//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::core::Word;
use crate::game::{Game, MAX_ROWS, ROW_LEN, SubmitOutcome};
use crate::output::{print_banner, print_board, print_summary};
use crate::wordlists::WordList;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run line mode on stdin/stdout with random targets
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(words: &WordList) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(words, stdin.lock(), &mut stdout, || {
        words.random_answer(&mut rand::rng()).clone()
    })
}

/// Line-mode game loop over arbitrary input and output
///
/// `next_target` is called once per round. Input ends the session on EOF.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_lines<R, W, T>(words: &WordList, mut input: R, out: &mut W, mut next_target: T) -> Result<()>
where
    R: BufRead,
    W: Write,
    T: FnMut() -> Word,
{
    print_banner(out)?;
    let mut game = Game::new(next_target());

    loop {
        if game.state().is_over() {
            let Some(answer) = get_user_input("Play again? (yes/no)", &mut input, out)? else {
                return Ok(());
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                game.restart(next_target());
                writeln!(out, "\nNew game started!\n")?;
                continue;
            }
            writeln!(out, "\nThanks for playing!\n")?;
            return Ok(());
        }

        let prompt = format!("Guess {}/{MAX_ROWS}", game.focus().row + 1);
        let Some(line) = get_user_input(&prompt, &mut input, out)? else {
            return Ok(());
        };
        let line = line.to_lowercase();

        match line.as_str() {
            "quit" | "exit" => {
                writeln!(out, "\nThanks for playing!\n")?;
                return Ok(());
            }
            "new" => {
                game.restart(next_target());
                writeln!(out, "\nNew game started!\n")?;
                continue;
            }
            _ => {}
        }

        if line.len() != ROW_LEN || !line.chars().all(|c| c.is_ascii_alphabetic()) {
            writeln!(out, "Word must be exactly {ROW_LEN} letters!")?;
            continue;
        }

        clear_row(&mut game);
        for c in line.chars() {
            game.input_letter(c);
        }

        match game.submit(words) {
            SubmitOutcome::Won { .. } => {
                print_board(out, &game)?;
                print_summary(out, &game, true)?;
            }
            SubmitOutcome::Lost { .. } => {
                print_board(out, &game)?;
                print_summary(out, &game, false)?;
            }
            SubmitOutcome::Accepted { .. } => print_board(out, &game)?,
            SubmitOutcome::NotAWord { word } => {
                writeln!(out, "'{word}' is not a word!")?;
                clear_row(&mut game);
            }
            SubmitOutcome::Incomplete | SubmitOutcome::GameOver => {}
        }
    }
}

/// Empty the current row; each backspace clears or steps back one cell
fn clear_row(game: &mut Game) {
    for _ in 0..ROW_LEN {
        game.backspace();
    }
}

/// Get user input with a prompt, `None` on EOF
fn get_user_input<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
