//! Round state and the state machine that drives it
//!
//! A round moves `Active → Evaluating → Active | Won | Lost`. While a guess
//! is `Evaluating` nothing else is accepted; the presentation layer calls
//! [`RoundController::finish_feedback`] once it has shown the feedback, and
//! only then is the guess committed to the history.

use super::engine::{self, EvaluatedGuess, MAX_GUESSES, Outcome};
use super::error::GuessError;
use super::guess::Guess;
use super::letters::LetterFeedback;
use super::picker::IndexSource;
use crate::core::{EvaluationRule, Word};
use crate::wordlists::{Dictionary, TargetPool};
use tracing::{debug, info};

/// A discrete player intent, already decoded from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Delete,
    Submit,
    /// Clear the board and draw a fresh target
    NewWord,
    /// Clear the board, keep the same target
    Reset,
}

/// Where the round is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Active,
    Evaluating(EvaluatedGuess),
    Won,
    Lost,
}

/// What an action did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Not accepted in the current phase, or nothing to do
    Ignored,
    /// The typed row changed
    Edited,
    Rejected(GuessError),
    /// A valid guess was scored and awaits [`RoundController::finish_feedback`]
    Evaluating(EvaluatedGuess),
    /// A pending guess was committed
    Resolved(Outcome),
    /// The board was cleared for a new round
    Restarted,
}

/// Everything about the live round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    history: Vec<EvaluatedGuess>,
    current: Guess,
    letters: LetterFeedback,
    phase: Phase,
}

impl RoundState {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            history: Vec::with_capacity(MAX_GUESSES),
            current: Guess::new(),
            letters: LetterFeedback::new(),
            phase: Phase::Active,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Committed guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[EvaluatedGuess] {
        &self.history
    }

    #[must_use]
    pub const fn current(&self) -> &Guess {
        &self.current
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterFeedback {
        &self.letters
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The guess being revealed, if any
    #[must_use]
    pub const fn pending(&self) -> Option<&EvaluatedGuess> {
        match &self.phase {
            Phase::Evaluating(pending) => Some(pending),
            _ => None,
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost,
            Phase::Active | Phase::Evaluating(_) => Outcome::InProgress,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active)
    }

    pub fn enter_letter(&mut self, letter: char) -> Step {
        if self.is_active() && self.current.push(letter) {
            Step::Edited
        } else {
            Step::Ignored
        }
    }

    pub fn delete_letter(&mut self) -> Step {
        if self.is_active() && self.current.pop().is_some() {
            Step::Edited
        } else {
            Step::Ignored
        }
    }

    /// Validate and score the typed row
    ///
    /// On success the row is cleared and the round enters `Evaluating`. On
    /// rejection nothing changes and the row stays editable.
    pub fn submit(&mut self, dictionary: &Dictionary, rule: EvaluationRule) -> Step {
        if !self.is_active() {
            return Step::Ignored;
        }

        match engine::submit_guess(&self.current, dictionary, &self.target, rule) {
            Ok(evaluated) => {
                self.current.clear();
                self.phase = Phase::Evaluating(evaluated.clone());
                Step::Evaluating(evaluated)
            }
            Err(reason) => Step::Rejected(reason),
        }
    }

    /// Commit the pending guess and move to the next phase
    pub fn finish_feedback(&mut self) -> Step {
        let Phase::Evaluating(pending) = std::mem::replace(&mut self.phase, Phase::Active) else {
            return Step::Ignored;
        };

        let outcome = engine::check_termination(&pending, self.history.len() + 1);
        self.letters.merge(&pending);
        self.history.push(pending);

        self.phase = match outcome {
            Outcome::InProgress => Phase::Active,
            Outcome::Won => Phase::Won,
            Outcome::Lost => Phase::Lost,
        };
        Step::Resolved(outcome)
    }
}

/// Owns the live round and its collaborators
pub struct RoundController<S: IndexSource> {
    dictionary: Dictionary,
    pool: TargetPool,
    source: S,
    rule: EvaluationRule,
    state: RoundState,
}

impl<S: IndexSource> RoundController<S> {
    /// Start the first round
    ///
    /// Every target in `pool` is added to `dictionary`, so the answer itself
    /// is always a valid guess.
    pub fn new(
        mut dictionary: Dictionary,
        pool: TargetPool,
        mut source: S,
        rule: EvaluationRule,
    ) -> Self {
        dictionary.extend_with(pool.words());
        let target = pool.pick(&mut source).clone();
        debug!(target = %target, "round started");

        Self {
            dictionary,
            pool,
            source,
            rule,
            state: RoundState::new(target),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub const fn rule(&self) -> EvaluationRule {
        self.rule
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn handle(&mut self, action: Action) -> Step {
        match action {
            Action::Letter(letter) => self.state.enter_letter(letter),
            Action::Delete => self.state.delete_letter(),
            Action::Submit => self.submit(),
            Action::NewWord => self.new_word(),
            Action::Reset => self.reset(),
        }
    }

    fn submit(&mut self) -> Step {
        let step = self.state.submit(&self.dictionary, self.rule);
        match &step {
            Step::Rejected(reason) => {
                debug!(guess = %self.state.current(), %reason, "guess rejected");
            }
            Step::Evaluating(evaluated) => {
                info!(
                    guess = %evaluated.word(),
                    feedback = %evaluated.evaluation().to_emoji(),
                    row = self.state.history().len() + 1,
                    "guess evaluated"
                );
            }
            _ => {}
        }
        step
    }

    /// Signal that the pending guess has been fully shown
    pub fn finish_feedback(&mut self) -> Step {
        let step = self.state.finish_feedback();
        if let Step::Resolved(outcome) = &step
            && outcome.is_over()
        {
            info!(
                ?outcome,
                guesses = self.state.history().len(),
                target = %self.state.target(),
                "round finished"
            );
        }
        step
    }

    /// Clear the board and draw a new target
    pub fn new_word(&mut self) -> Step {
        if matches!(self.state.phase(), Phase::Evaluating(_)) {
            return Step::Ignored;
        }
        let target = self.pool.pick(&mut self.source).clone();
        debug!(target = %target, "new word drawn");
        self.state = RoundState::new(target);
        Step::Restarted
    }

    /// Clear the board, keeping the target
    pub fn reset(&mut self) -> Step {
        if matches!(self.state.phase(), Phase::Evaluating(_)) {
            return Step::Ignored;
        }
        debug!(target = %self.state.target(), "round reset");
        self.state = RoundState::new(self.state.target().clone());
        Step::Restarted
    }
}
