//! The row currently being typed

use crate::core::{WORD_LENGTH, Word};
use std::fmt;

/// Up to five letters typed since the last submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Guess {
    letters: [u8; WORD_LENGTH],
    len: usize,
}

impl Guess {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [0; WORD_LENGTH],
            len: 0,
        }
    }

    /// Append a letter, lowercased
    ///
    /// Returns `false` (and leaves the guess unchanged) if the row is already
    /// full or `letter` is not an ASCII letter.
    pub fn push(&mut self, letter: char) -> bool {
        if self.len >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letters[self.len] = letter.to_ascii_lowercase() as u8;
        self.len += 1;
        true
    }

    /// Remove the last letter, if any
    pub fn pop(&mut self) -> Option<char> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(char::from(self.letters[self.len]))
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.len == WORD_LENGTH
    }

    /// The typed letters so far
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.letters()).unwrap_or_default()
    }

    /// The finished word, once all five letters are in
    #[must_use]
    pub const fn to_word(&self) -> Option<Word> {
        if self.is_complete() {
            Some(Word::from_letters(self.letters))
        } else {
            None
        }
    }
}

impl From<&str> for Guess {
    /// Types each character in turn; extra or non-letter characters are dropped
    fn from(text: &str) -> Self {
        let mut guess = Self::new();
        for c in text.chars() {
            guess.push(c);
        }
        guess
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
