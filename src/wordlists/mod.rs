//! Word lists for the game
//!
//! Embedded lists compiled into the binary, plus the two collaborators the
//! engine consumes: a [`Dictionary`] of valid guesses and a [`TargetPool`]
//! of possible answers.

mod dictionary;
mod embedded;
pub mod loader;
mod pool;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use pool::TargetPool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_five_lowercase_letters() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: std::collections::HashSet<_> = ALLOWED.iter().collect();
        for answer in ANSWERS {
            assert!(allowed.contains(answer), "Answer '{answer}' not in allowed list");
        }
    }

    #[test]
    fn everyday_words_are_allowed() {
        for word in ["first", "there", "their", "these", "words", "women", "about", "world"] {
            assert!(ALLOWED.contains(&word), "'{word}' missing from allowed list");
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 881, "Expected 881 answer words");
        assert_eq!(ALLOWED_COUNT, 4392, "Expected 4,392 allowed words");
    }
}
