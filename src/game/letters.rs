//! Best feedback seen per letter, used to colour the keyboard

use super::engine::EvaluatedGuess;
use crate::core::Feedback;
use rustc_hash::FxHashMap;

/// Letter → best feedback observed so far this round
///
/// Entries only ever move up the `Absent < Present < Correct` ladder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFeedback {
    best: FxHashMap<u8, Feedback>,
}

impl LetterFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one letter's feedback, keeping whichever ranks higher
    pub fn record(&mut self, letter: u8, feedback: Feedback) {
        self.best
            .entry(letter.to_ascii_lowercase())
            .and_modify(|best| *best = (*best).max(feedback))
            .or_insert(feedback);
    }

    /// Fold every position of an evaluated guess into the map
    pub fn merge(&mut self, evaluated: &EvaluatedGuess) {
        for (&letter, &feedback) in evaluated
            .word()
            .letters()
            .iter()
            .zip(evaluated.evaluation().feedback())
        {
            self.record(letter, feedback);
        }
    }

    /// Best feedback for `letter`, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Feedback> {
        self.best.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Letters guessed so far, in alphabetical order
    #[must_use]
    pub fn guessed(&self) -> Vec<(u8, Feedback)> {
        let mut letters: Vec<_> = self.best.iter().map(|(&l, &f)| (l, f)).collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, Correct, Present};

    #[test]
    fn record_upgrades() {
        let mut letters = LetterFeedback::new();
        letters.record(b'a', Absent);
        letters.record(b'a', Present);
        assert_eq!(letters.get(b'a'), Some(Present));
        letters.record(b'a', Correct);
        assert_eq!(letters.get(b'a'), Some(Correct));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut letters = LetterFeedback::new();
        letters.record(b'e', Correct);
        letters.record(b'e', Present);
        letters.record(b'e', Absent);
        assert_eq!(letters.get(b'e'), Some(Correct));
    }

    #[test]
    fn unseen_letters_are_none() {
        let letters = LetterFeedback::new();
        assert!(letters.is_empty());
        assert_eq!(letters.get(b'z'), None);
    }

    #[test]
    fn guessed_is_sorted() {
        let mut letters = LetterFeedback::new();
        letters.record(b'z', Absent);
        letters.record(b'b', Present);
        assert_eq!(letters.guessed(), vec![(b'b', Present), (b'z', Absent)]);
    }
}
