//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};
use crate::game::{EvaluatedGuess, LetterFeedback};
use crate::keyboard::LETTER_ROWS;
use colored::{ColoredString, Colorize};

/// Where the win screen points for a definition of the guessed word
#[must_use]
pub fn definition_url(word: &Word) -> String {
    format!(
        "https://www.thefreedictionary.com/{}",
        word.as_str().to_uppercase()
    )
}

/// A single letter tile, coloured by feedback
#[must_use]
pub fn colored_letter(letter: u8, feedback: Option<Feedback>) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match feedback {
        Some(Feedback::Correct) => text.black().on_green().bold(),
        Some(Feedback::Present) => text.black().on_yellow().bold(),
        Some(Feedback::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// An evaluated guess as a row of coloured tiles
#[must_use]
pub fn colored_row(evaluated: &EvaluatedGuess) -> String {
    evaluated
        .word()
        .letters()
        .iter()
        .zip(evaluated.evaluation().feedback())
        .map(|(&letter, &feedback)| colored_letter(letter, Some(feedback)).to_string())
        .collect()
}

/// The QWERTY keyboard with each letter coloured by its best feedback
#[must_use]
pub fn keyboard_summary(letters: &LetterFeedback) -> String {
    LETTER_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| colored_letter(letter, letters.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
