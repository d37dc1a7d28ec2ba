//! Per-letter feedback and guess evaluation
//!
//! Each guessed letter is scored against the target as one of:
//! - Absent (letter not in word)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)
//!
//! The derived ordering `Absent < Present < Correct` is the precedence used
//! when the keyboard remembers the best feedback seen for a letter.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationRule {
    /// Every letter found anywhere in the target is Present, however many
    /// times the guess repeats it
    #[default]
    Lenient,
    /// Greens first, then yellows only while unmatched copies of the letter
    /// remain in the target
    Standard,
}

impl FromStr for EvaluationRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "standard" => Ok(Self::Standard),
            other => Err(format!(
                "unknown rule '{other}' (expected 'lenient' or 'standard')"
            )),
        }
    }
}

impl fmt::Display for EvaluationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lenient => "lenient",
            Self::Standard => "standard",
        })
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Feedback; WORD_LENGTH]);

impl Evaluation {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Score `guess` against `target` under the given rule
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, EvaluationRule, Feedback::*, Word};
    ///
    /// let guess = Word::new("dance").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &target, EvaluationRule::Lenient);
    ///
    /// assert_eq!(evaluation.feedback(), &[Absent, Present, Present, Present, Correct]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word, rule: EvaluationRule) -> Self {
        match rule {
            EvaluationRule::Lenient => Self::lenient(guess, target),
            EvaluationRule::Standard => Self::standard(guess, target),
        }
    }

    fn lenient(guess: &Word, target: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];

        for (i, (slot, &letter)) in result.iter_mut().zip(guess.letters()).enumerate() {
            *slot = if target.letter_at(i) == letter {
                Feedback::Correct
            } else if target.contains(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self(result)
    }

    fn standard(guess: &Word, target: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: greens, removed from the available pool
        for (i, slot) in result.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if target.letter_at(i) == letter {
                *slot = Feedback::Correct;
                let count = &mut available[usize::from(letter - b'a')];
                *count = count.saturating_sub(1);
            }
        }

        // Second pass: yellows from whatever is left
        for (i, slot) in result.iter_mut().enumerate() {
            if *slot == Feedback::Correct {
                continue;
            }
            let count = &mut available[usize::from(guess.letter_at(i) - b'a')];
            if *count > 0 {
                *slot = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert the evaluation to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
