//! Target words a round can be played against

use crate::core::Word;
use crate::game::{IndexSource, PoolError};

/// Non-empty list of possible answers
#[derive(Debug, Clone)]
pub struct TargetPool {
    words: Vec<Word>,
}

impl TargetPool {
    /// # Errors
    ///
    /// Returns [`PoolError::Empty`] if `words` yields nothing.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, PoolError> {
        let words: Vec<Word> = words.into_iter().collect();
        if words.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { words })
    }

    /// Draw one target using `source` for the index
    pub fn pick(&self, source: &mut impl IndexSource) -> &Word {
        let index = source.next_index(self.words.len()) % self.words.len();
        &self.words[index]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a pool cannot be built empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
