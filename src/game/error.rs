//! Rejection reasons surfaced to the player

use thiserror::Error;

/// Why a submitted guess was refused
///
/// Both variants leave the round untouched; the player keeps editing the
/// same row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    IncompleteGuess { letters: usize },
    #[error("Not in word list")]
    NotInDictionary { word: String },
}

/// Errors building a target-word pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("target word pool is empty")]
    Empty,
}
