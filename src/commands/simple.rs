//! Simple line-based game mode
//!
//! One guess per line instead of a full-screen board.

use crate::core::WORD_LENGTH;
use crate::game::{Action, IndexSource, RoundController, Step};
use crate::output::{
    print_banner, print_evaluated_guess, print_keyboard, print_outcome, print_rejection,
};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Guess(String),
    NewWord,
    Reset,
    Quit,
}

fn parse_line(line: &str) -> Line {
    match line.trim().to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => Line::Quit,
        ":new" | ":n" => Line::NewWord,
        ":reset" | ":r" => Line::Reset,
        guess => Line::Guess(guess.to_string()),
    }
}

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_simple<S: IndexSource>(
    round: &mut RoundController<S>,
    mut input: impl BufRead,
) -> Result<()> {
    print_banner();

    loop {
        let row = round.state().history().len() + 1;
        let Some(line) = prompt(&mut input, &format!("Guess {row}"))? else {
            return Ok(());
        };

        match parse_line(&line) {
            Line::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Line::NewWord => {
                round.handle(Action::NewWord);
                println!("\n🔄 New word drawn!\n");
            }
            Line::Reset => {
                round.handle(Action::Reset);
                println!("\n🔄 Board cleared, same word.\n");
            }
            Line::Guess(text) => {
                if !play_guess(round, &text) {
                    continue;
                }
                if round.state().outcome().is_over() {
                    print_outcome(round.state());
                    let again = prompt(&mut input, "Play again? (yes/no)")?
                        .map(|answer| answer.to_lowercase());
                    if !matches!(again.as_deref(), Some("yes" | "y")) {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    round.handle(Action::NewWord);
                    println!("\n🔄 New word drawn!\n");
                }
            }
        }
    }
}

/// Problems the round itself cannot report, since it never sees the line
fn line_problem(text: &str) -> Option<&'static str> {
    if !text.chars().all(|c| c.is_ascii_alphabetic()) {
        Some("Letters only")
    } else if text.chars().count() > WORD_LENGTH {
        Some("Too many letters")
    } else {
        None
    }
}

/// Type one whole guess into the round and resolve it
///
/// Returns `true` if the guess was accepted.
fn play_guess<S: IndexSource>(round: &mut RoundController<S>, text: &str) -> bool {
    if let Some(problem) = line_problem(text) {
        println!("  {}", format!("❌ {problem}").red());
        return false;
    }

    while round.handle(Action::Delete) == Step::Edited {}
    for letter in text.chars() {
        round.handle(Action::Letter(letter));
    }

    match round.handle(Action::Submit) {
        Step::Evaluating(evaluated) => {
            round.finish_feedback();
            print_evaluated_guess(&evaluated, round.state().history().len());
            if !round.state().outcome().is_over() {
                print_keyboard(round.state());
            }
            true
        }
        Step::Rejected(reason) => {
            print_rejection(&reason);
            while round.handle(Action::Delete) == Step::Edited {}
            false
        }
        _ => false,
    }
}

/// Print a prompt and read one line; `None` at end of input
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
