//! Display functions for line-mode play

use super::formatters::{colored_row, definition_url, keyboard_summary};
use crate::core::Evaluation;
use crate::game::{EvaluatedGuess, GuessError, MAX_GUESSES, Outcome, RoundState};
use colored::Colorize;

/// Print the welcome banner
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle - guess the five-letter word           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("You have {MAX_GUESSES} tries. After each guess the tiles show:");
    println!(
        "  {} right letter, right spot",
        " G ".black().on_green().bold()
    );
    println!(
        "  {} in the word, wrong spot",
        " Y ".black().on_yellow().bold()
    );
    println!("  {} not in the word\n", " X ".white().on_bright_black());
    println!("Commands: ':new' for a new word, ':reset' to restart, ':quit' to exit\n");
}

/// Print one evaluated guess with its row number
pub fn print_evaluated_guess(evaluated: &EvaluatedGuess, row: usize) {
    println!(
        "  {}. {}  {}",
        row.to_string().bright_black(),
        colored_row(evaluated),
        evaluated.evaluation().to_emoji()
    );
}

/// Print a rejected guess
pub fn print_rejection(reason: &GuessError) {
    println!("  {}", format!("❌ {reason}").red());
}

/// Print which letters have been tried
pub fn print_keyboard(state: &RoundState) {
    if state.letters().is_empty() {
        return;
    }
    println!();
    println!("{}", keyboard_summary(state.letters()));
    println!();
}

/// Print the end-of-round message
pub fn print_outcome(state: &RoundState) {
    match state.outcome() {
        Outcome::Won => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{}", "    🎉  You Win  🎉".bright_green().bold());
            println!("{}", "═".repeat(60).bright_cyan());

            let guesses = state.history().len();
            println!(
                "\n  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
            println!(
                "  See definition of {}: {}",
                state.target().as_str().bright_white().bold(),
                definition_url(state.target()).underline()
            );
        }
        Outcome::Lost => {
            println!(
                "\n  {} The word was {}",
                "Out of guesses.".red().bold(),
                state.target().as_str().to_uppercase().bright_yellow().bold()
            );
        }
        Outcome::InProgress => return,
    }

    let share: Vec<String> = state
        .history()
        .iter()
        .map(|guess| guess.evaluation().to_emoji())
        .collect();
    println!("\n{}\n", share.join("\n"));
}

/// Print a single `check` result
pub fn print_check(guess: &str, target: &str, evaluation: &Evaluation) {
    println!(
        "{} vs {}: {}",
        guess.to_uppercase().bright_white().bold(),
        target.to_uppercase().bright_white(),
        evaluation.to_emoji()
    );
}
