//! Wordle - CLI
//!
//! Word-guessing game with a full-screen TUI and a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{check_word, run_simple},
    config::GameConfig,
    core::EvaluationRule,
    interactive::{App, run_tui},
    output::print_check,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring of repeated letters: lenient (default) or standard
    #[arg(short, long, global = true, default_value = "lenient")]
    rule: EvaluationRule,

    /// Seed for target selection (same seed, same words)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Replace the built-in list of valid guesses with a file
    #[arg(short, long, global = true, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Replace the built-in list of target words with a file
    #[arg(short, long, global = true, value_name = "PATH")]
    targets: Option<PathBuf>,

    /// Write logs to a file (the TUI only logs when this is set)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Score one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let to_stderr = !matches!(command, Commands::Play);
    setup_tracing(cli.verbose, cli.log_file.as_deref(), to_stderr)?;

    match command {
        Commands::Check { guess, target } => {
            let evaluation = check_word(&guess, &target, cli.rule)?;
            print_check(&guess, &target, &evaluation);
            Ok(())
        }
        Commands::Play => {
            let config = load_config(&cli)?;
            let app = App::new(config.controller()?);
            run_tui(app)
        }
        Commands::Simple => {
            let config = load_config(&cli)?;
            let mut round = config.controller()?;
            run_simple(&mut round, std::io::stdin().lock())
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    GameConfig::load(
        cli.dictionary.as_deref(),
        cli.targets.as_deref(),
        cli.rule,
        cli.seed,
    )
}

fn default_directives(verbose: bool, to_file: bool) -> &'static str {
    if verbose {
        "wordle_game=debug,info"
    } else if to_file {
        "wordle_game=info,warn"
    } else {
        "warn"
    }
}

fn setup_tracing(verbose: bool, log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::EnvFilter;

    // stderr interleaves with the board, so only warnings by default there
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, log_file.is_some())));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .init();

        tracing::info!(path = %path.display(), "tracing initialized");
        return Ok(());
    }

    // The TUI owns the terminal, so it stays silent without a log file
    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    Ok(())
}
