//! Filtered retrieval over a corpus.

use memchr::memmem::Finder;
use pangram_types::PhraseKind;
use rand::Rng;

use crate::corpus::types::PhraseCorpus;

impl PhraseCorpus {
    /// Returns every phrase of `kind`, in original order.
    pub fn by_kind(&self, kind: PhraseKind) -> Vec<&str> {
        self.iter()
            .filter(|&(_, k)| k == kind)
            .map(|(phrase, _)| phrase)
            .collect()
    }

    /// Picks a phrase uniformly at random.
    ///
    /// With `kind` set, only phrases of that kind are candidates. Returns
    /// `None` when there are no candidates.
    pub fn random<R: Rng>(&self, kind: Option<PhraseKind>, rng: &mut R) -> Option<&str> {
        let candidates: Vec<usize> = self
            .kinds
            .iter()
            .enumerate()
            .filter(|&(_, &k)| kind.map_or(true, |wanted| wanted == k))
            .map(|(i, _)| i)
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let pick = candidates[rng.random_range(0..candidates.len())];
        self.get(pick)
    }

    /// Returns phrases containing `query`, ignoring case, in original order.
    ///
    /// Matches against the raw phrase text, not its normalized form, so
    /// accents and punctuation in the query must match the stored phrase.
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let finder = Finder::new(needle.as_bytes());

        self.lowered
            .iter()
            .zip(&self.phrases)
            .filter(|(lowered, _)| finder.find(lowered.as_bytes()).is_some())
            .map(|(_, phrase)| phrase.as_str())
            .collect()
    }
}
