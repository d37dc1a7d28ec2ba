//! Membership set of valid guesses

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Every word the player may submit
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Add more words, typically the target pool so any answer is guessable
    pub fn extend_with<'a>(&mut self, words: impl IntoIterator<Item = &'a Word>) {
        self.words.extend(words.into_iter().cloned());
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn membership() {
        let dictionary = Dictionary::from_words(words(&["crane", "slate"]));
        assert!(dictionary.contains(&Word::new("crane").unwrap()));
        assert!(!dictionary.contains(&Word::new("zzzzz").unwrap()));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn duplicates_collapse() {
        let dictionary = Dictionary::from_words(words(&["crane", "crane"]));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn extend_with_targets() {
        let mut dictionary = Dictionary::from_words(words(&["crane"]));
        let targets = words(&["apple", "crane"]);
        dictionary.extend_with(&targets);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains(&targets[0]));
    }
}
