use std::collections::HashSet;

use crate::model::Phrase;

/// Ordered collection of unique phrases.
///
/// Duplicates are dropped when the store is built; the first occurrence of
/// each pair keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseStore {
    phrases: Vec<Phrase>,
    removed_duplicates: usize,
}

impl PhraseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `phrases`, dropping every later duplicate.
    #[must_use]
    pub fn from_phrases(phrases: impl IntoIterator<Item = Phrase>) -> Self {
        let mut seen = HashSet::new();
        let mut store = Self::new();
        for phrase in phrases {
            if seen.insert(phrase.clone()) {
                store.phrases.push(phrase);
            } else {
                store.removed_duplicates += 1;
            }
        }
        store
    }

    /// Append `phrase` unless an equal pair is already stored.
    ///
    /// Returns `true` if the phrase was added.
    pub fn push(&mut self, phrase: Phrase) -> bool {
        if self.contains(&phrase) {
            return false;
        }
        self.phrases.push(phrase);
        true
    }

    #[must_use]
    pub fn contains(&self, phrase: &Phrase) -> bool {
        self.phrases.iter().any(|p| p == phrase)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[must_use]
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Number of duplicates dropped by [`PhraseStore::from_phrases`].
    #[must_use]
    pub fn removed_duplicates(&self) -> usize {
        self.removed_duplicates
    }
}
