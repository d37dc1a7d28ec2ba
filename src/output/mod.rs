//! Terminal output formatting
//!
//! Coloured tiles and messages for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_check, print_evaluated_guess, print_keyboard, print_outcome,
    print_rejection,
};
pub use formatters::definition_url;
