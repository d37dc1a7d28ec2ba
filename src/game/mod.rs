//! Game rules and round lifecycle
//!
//! [`engine`] holds the pure guess evaluation; [`RoundController`] owns the
//! live [`RoundState`] and applies [`Action`]s to it.

pub mod engine;
mod error;
mod guess;
mod letters;
mod picker;
mod round;

pub use engine::{
    EvaluatedGuess, MAX_GUESSES, Outcome, check_termination, evaluate_guess, submit_guess,
};
pub use error::{GuessError, PoolError};
pub use guess::Guess;
pub use letters::LetterFeedback;
pub use picker::{FixedIndex, IndexSource, RandomIndex};
pub use round::{Action, Phase, RoundController, RoundState, Step};
