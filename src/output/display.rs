//! Display functions for line-mode play

use super::formatters::{colored_row, share_grid};
use crate::game::{Game, MAX_ROWS};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║              W O R D L E             ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in {MAX_ROWS} tries.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")
}

/// Print every submitted row as colored tiles
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    for row in 0..MAX_ROWS {
        if let Some(feedback) = game.grid().feedback(row) {
            writeln!(out, "  {}", colored_row(&game.grid().row_word(row), feedback))?;
        }
    }
    Ok(())
}

/// Print the end-of-round summary
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_summary<W: Write>(out: &mut W, game: &Game, won: bool) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    if won {
        writeln!(out, "{}", "  You did it".bright_green().bold())?;
    } else {
        writeln!(
            out,
            "  Bad luck today. The word was: {}",
            game.target().text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(out, "\n{}", share_grid(game))?;
    writeln!(out, "{}\n", "═".repeat(40).bright_cyan())
}
