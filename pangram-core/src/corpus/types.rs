//! Corpus storage.

use pangram_types::{NormalizedPhrase, PhraseKind};

use crate::analyzer::kind_of;

/// A loaded phrase list with each phrase's verdict cached.
///
/// Phrases keep their original order. Every verdict comes from the same
/// [`analyze`](crate::analyzer::analyze) pipeline used for single-phrase
/// checks, so batch and interactive results never disagree.
///
/// Once built, a corpus is only read; sharing it between threads needs no
/// locking.
#[derive(Debug, Clone, Default)]
pub struct PhraseCorpus {
    pub(crate) phrases: Vec<String>,
    /// Lowercased raw phrases, used for substring search.
    pub(crate) lowered: Vec<String>,
    pub(crate) kinds: Vec<PhraseKind>,
    pub(crate) norm_buf: NormalizedPhrase,
}

impl PhraseCorpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty corpus with room for `capacity` phrases.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            phrases: Vec::with_capacity(capacity),
            lowered: Vec::with_capacity(capacity),
            kinds: Vec::with_capacity(capacity),
            norm_buf: NormalizedPhrase::with_capacity(256),
        }
    }

    /// Returns the number of phrases.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` if the corpus holds no phrases.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Removes all phrases.
    pub fn clear(&mut self) {
        self.phrases.clear();
        self.lowered.clear();
        self.kinds.clear();
    }

    pub(crate) fn insert(&mut self, phrase: String) -> usize {
        let kind = kind_of(&phrase, &mut self.norm_buf);
        let index = self.phrases.len();
        self.lowered.push(phrase.to_lowercase());
        self.phrases.push(phrase);
        self.kinds.push(kind);
        index
    }
}
