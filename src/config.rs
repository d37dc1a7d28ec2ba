//! Resolved game settings
//!
//! Collects the word lists, scoring rule and seed chosen on the command
//! line, and builds the round controller from them.

use crate::core::{EvaluationRule, Word};
use crate::game::{PoolError, RandomIndex, RoundController};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ALLOWED, ANSWERS, Dictionary, TargetPool};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Everything needed to start playing
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub dictionary: Vec<Word>,
    pub targets: Vec<Word>,
    pub rule: EvaluationRule,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: words_from_slice(ALLOWED),
            targets: words_from_slice(ANSWERS),
            rule: EvaluationRule::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Embedded lists, optionally replaced by files
    ///
    /// # Errors
    ///
    /// Returns an error if a given word file cannot be read or holds no valid
    /// words.
    pub fn load(
        dictionary: Option<&Path>,
        targets: Option<&Path>,
        rule: EvaluationRule,
        seed: Option<u64>,
    ) -> Result<Self> {
        let mut config = Self {
            rule,
            seed,
            ..Self::default()
        };

        if let Some(path) = dictionary {
            config.dictionary = load_words(path)?;
        }
        if let Some(path) = targets {
            config.targets = load_words(path)?;
        }

        debug!(
            dictionary = config.dictionary.len(),
            targets = config.targets.len(),
            %rule,
            ?seed,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Build the controller and draw the first target
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Empty`] if there are no target words.
    pub fn controller(&self) -> Result<RoundController<RandomIndex>, PoolError> {
        let pool = TargetPool::new(self.targets.iter().cloned())?;
        let dictionary = Dictionary::from_words(self.dictionary.iter().cloned());
        let source = self
            .seed
            .map_or_else(RandomIndex::from_entropy, RandomIndex::seeded);
        Ok(RoundController::new(dictionary, pool, source, self.rule))
    }
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    let words =
        load_from_file(path).with_context(|| format!("reading word list {}", path.display()))?;
    anyhow::ensure!(
        !words.is_empty(),
        "word list {} has no five-letter words",
        path.display()
    );
    Ok(words)
}
