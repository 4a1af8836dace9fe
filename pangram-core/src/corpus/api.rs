//! Public API for loading and reading phrases.

use pangram_types::PhraseKind;

use crate::corpus::types::PhraseCorpus;
use crate::store::{PhraseSource, StoreError};

impl PhraseCorpus {
    /// Builds a corpus from raw phrases, classifying each one.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let iter = phrases.into_iter();
        let mut corpus = Self::with_capacity(iter.size_hint().0);
        for phrase in iter {
            corpus.insert(phrase.into());
        }
        corpus
    }

    /// Loads every phrase from `source`.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged. Nothing is classified unless
    /// the whole read succeeds.
    pub fn from_source<P: PhraseSource + ?Sized>(source: &P) -> Result<Self, StoreError> {
        let phrases = source.load()?;
        let corpus = Self::from_phrases(phrases);
        tracing::debug!(phrases = corpus.len(), "corpus loaded");
        Ok(corpus)
    }

    /// Adds one phrase and returns its index.
    pub fn push(&mut self, phrase: impl Into<String>) -> usize {
        self.insert(phrase.into())
    }

    /// Retrieves a phrase by index.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    /// Retrieves the cached verdict tag of a phrase.
    #[inline(always)]
    pub fn kind_of(&self, index: usize) -> Option<PhraseKind> {
        self.kinds.get(index).copied()
    }

    /// All phrases, in original order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> + '_ {
        self.phrases.iter().map(String::as_str)
    }

    /// Phrases paired with their verdict tags, in original order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, PhraseKind)> + '_ {
        self.phrases
            .iter()
            .map(String::as_str)
            .zip(self.kinds.iter().copied())
    }
}
