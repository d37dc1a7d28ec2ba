//! Guess evaluation and round termination
//!
//! Pure functions: nothing here touches a [`RoundState`](super::RoundState).
//! The caller decides what to do with the returned evaluation.

use super::error::GuessError;
use super::guess::Guess;
use crate::core::{Evaluation, EvaluationRule, Feedback, WORD_LENGTH, Word};
use crate::wordlists::Dictionary;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Where a round stands after a guess is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted word with its feedback; never modified once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    word: Word,
    evaluation: Evaluation,
}

impl EvaluatedGuess {
    #[must_use]
    pub const fn new(word: Word, evaluation: Evaluation) -> Self {
        Self { word, evaluation }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.evaluation.is_perfect()
    }
}

/// Validate the typed row and, if acceptable, score it against `target`
///
/// # Errors
///
/// - [`GuessError::IncompleteGuess`] if fewer than five letters are typed
/// - [`GuessError::NotInDictionary`] if the word is not a known guess
pub fn submit_guess(
    current: &Guess,
    dictionary: &Dictionary,
    target: &Word,
    rule: EvaluationRule,
) -> Result<EvaluatedGuess, GuessError> {
    let word = current.to_word().ok_or(GuessError::IncompleteGuess {
        letters: current.len(),
    })?;

    if !dictionary.contains(&word) {
        return Err(GuessError::NotInDictionary {
            word: word.to_string(),
        });
    }

    let evaluation = Evaluation::calculate(&word, target, rule);
    Ok(EvaluatedGuess::new(word, evaluation))
}

/// Per-letter feedback with the round's default scoring
///
/// Correct where the letters match, Present where the target holds the letter
/// elsewhere, Absent otherwise. Repeated guess letters are not capped by how
/// often they occur in the target.
#[must_use]
pub fn evaluate_guess(guess: &Word, target: &Word) -> [Feedback; WORD_LENGTH] {
    *Evaluation::calculate(guess, target, EvaluationRule::Lenient).feedback()
}

/// Decide the round outcome once `evaluated` has been appended to a history
/// of `history_len` guesses
#[must_use]
pub fn check_termination(evaluated: &EvaluatedGuess, history_len: usize) -> Outcome {
    if evaluated.is_perfect() {
        Outcome::Won
    } else if history_len >= MAX_GUESSES {
        Outcome::Lost
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, Correct, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["crane", "crate", "dance", "apple", "slate"].map(word))
    }

    #[test]
    fn submit_rejects_short_guess() {
        let result = submit_guess(
            &Guess::from("ab"),
            &dictionary(),
            &word("abcde"),
            EvaluationRule::Lenient,
        );
        assert_eq!(result, Err(GuessError::IncompleteGuess { letters: 2 }));
    }

    #[test]
    fn submit_rejects_unknown_word() {
        let result = submit_guess(
            &Guess::from("zzzzz"),
            &dictionary(),
            &word("crane"),
            EvaluationRule::Lenient,
        );
        assert_eq!(
            result,
            Err(GuessError::NotInDictionary {
                word: "zzzzz".to_string()
            })
        );
    }

    #[test]
    fn submit_evaluates_known_word() {
        let evaluated = submit_guess(
            &Guess::from("crate"),
            &dictionary(),
            &word("crane"),
            EvaluationRule::Lenient,
        )
        .unwrap();
        assert_eq!(evaluated.word(), &word("crate"));
        assert_eq!(
            evaluated.evaluation().feedback(),
            &[Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_dance_against_crane() {
        assert_eq!(
            evaluate_guess(&word("dance"), &word("crane")),
            [Absent, Present, Present, Present, Correct]
        );
    }

    #[test]
    fn termination_won_on_exact_match() {
        let target = word("crane");
        let evaluated = EvaluatedGuess::new(
            target.clone(),
            Evaluation::calculate(&target, &target, EvaluationRule::Lenient),
        );
        assert_eq!(check_termination(&evaluated, 1), Outcome::Won);
        // a win on the last row is still a win
        assert_eq!(check_termination(&evaluated, MAX_GUESSES), Outcome::Won);
    }

    #[test]
    fn termination_lost_on_sixth_miss() {
        let evaluated = EvaluatedGuess::new(
            word("slate"),
            Evaluation::calculate(&word("slate"), &word("crane"), EvaluationRule::Lenient),
        );
        assert_eq!(check_termination(&evaluated, 5), Outcome::InProgress);
        assert_eq!(check_termination(&evaluated, 6), Outcome::Lost);
    }

    #[test]
    fn outcome_is_over() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Won.is_over());
        assert!(Outcome::Lost.is_over());
    }
}
