//! Wordle
//!
//! Guess the hidden five-letter word in six tries, with per-letter feedback
//! after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{EvaluationRule, Word};
//! use wordle_game::game::{Action, FixedIndex, Outcome, RoundController, Step};
//! use wordle_game::wordlists::{Dictionary, TargetPool};
//!
//! let words: Vec<Word> = ["crane", "slate"].iter().map(|w| Word::new(w).unwrap()).collect();
//! let mut round = RoundController::new(
//!     Dictionary::from_words(words.clone()),
//!     TargetPool::new(words).unwrap(),
//!     FixedIndex::new([0]),
//!     EvaluationRule::Lenient,
//! );
//!
//! for c in "crane".chars() {
//!     round.handle(Action::Letter(c));
//! }
//! assert!(matches!(round.handle(Action::Submit), Step::Evaluating(_)));
//! assert_eq!(round.finish_feedback(), Step::Resolved(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Rules and round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command-line settings
pub mod config;

// Keyboard layout shared by every front end
pub mod keyboard;

// Raw terminal events to actions
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
