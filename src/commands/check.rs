//! Score a single guess against a chosen target

use crate::core::{Evaluation, EvaluationRule, Word, WordError};

/// Evaluate `guess` against `target` without playing a round
///
/// # Errors
///
/// Returns `WordError` if either word is not five ASCII letters.
pub fn check_word(
    guess: &str,
    target: &str,
    rule: EvaluationRule,
) -> Result<Evaluation, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Evaluation::calculate(&guess, &target, rule))
}
