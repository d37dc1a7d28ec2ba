//! Validated five-letter words
//!
//! Every word that reaches the engine, whether target or guess, goes through
//! [`Word::new`], so the rest of the crate can index positions 0-4 freely.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A five-letter lowercase ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: letters.map(|b| b.to_ascii_lowercase()),
        })
    }

    /// Build a word from raw lowercase bytes already known to be valid
    pub(crate) const fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how many times each letter occurs, indexed by `letter - b'a'`
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.letters {
            counts[usize::from(letter - b'a')] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
