//! Core domain types
//!
//! Words and per-letter feedback. Pure values, no I/O.

mod feedback;
mod word;

pub use feedback::{Evaluation, EvaluationRule, Feedback};
pub use word::{WORD_LENGTH, Word, WordError};
