//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState};
use crate::game::{Game, MAX_ROWS};
use colored::{ColoredString, Colorize};

/// Color one guessed letter by its state
#[must_use]
pub fn colored_letter(letter: char, state: LetterState) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Exact => cell.black().on_green().bold(),
        LetterState::Present => cell.black().on_yellow().bold(),
        LetterState::Absent => cell.white().on_bright_black(),
    }
}

/// A submitted guess as a row of colored tiles
#[must_use]
pub fn colored_row(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.states())
        .map(|(letter, &state)| colored_letter(letter, state).to_string())
        .collect()
}

/// Emoji summary of every submitted row, one per line
#[must_use]
pub fn share_grid(game: &Game) -> String {
    (0..MAX_ROWS)
        .filter_map(|row| game.grid().feedback(row))
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let feedback = Feedback::evaluate(&Word::new("crane").unwrap(), &Word::new("cigar").unwrap());
        assert_eq!(colored_row("crane", &feedback), " C  R  A  N  E ");
    }

    #[test]
    fn share_grid_lists_submitted_rows() {
        let words = WordList::from_words(["cigar", "crane"]).unwrap();
        let mut game = Game::new(Word::new("cigar").unwrap());
        for word in ["crane", "cigar"] {
            for c in word.chars() {
                game.input_letter(c);
            }
            game.submit(&words);
        }
        assert_eq!(share_grid(&game), "🟩🟨🟨⬜⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty_game() {
        let game = Game::new(Word::new("cigar").unwrap());
        assert_eq!(share_grid(&game), "");
    }
}
