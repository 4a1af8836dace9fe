//! Aggregate verdict counts.

use pangram_types::{NormalizedPhrase, Stats};

use crate::analyzer::kind_of;
use crate::corpus::types::PhraseCorpus;
use crate::store::{PhraseSource, StoreError};

/// Classifies every phrase and tallies the verdicts.
///
/// `total` always equals the number of phrases and each phrase lands in
/// exactly one counter. Order does not affect the result.
///
/// # Example
///
/// ```
/// use pangram_core::corpus::aggregate;
///
/// let stats = aggregate(["abcdefghijklmnopqrstuvwxyz", "hello world"]);
/// assert_eq!(stats.perfect, 1);
/// assert_eq!(stats.not_pangram, 1);
/// assert_eq!(stats.total, 2);
/// ```
pub fn aggregate<I, S>(phrases: I) -> Stats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buf = NormalizedPhrase::with_capacity(256);
    phrases
        .into_iter()
        .map(|phrase| kind_of(phrase.as_ref(), &mut buf))
        .collect()
}

/// Reads `source` once and aggregates it.
///
/// # Errors
///
/// Returns the read error and no partial counts if the source fails.
pub fn aggregate_source<P: PhraseSource + ?Sized>(source: &P) -> Result<Stats, StoreError> {
    let phrases = source.load()?;
    Ok(aggregate(&phrases))
}

impl PhraseCorpus {
    /// Returns verdict counts over the whole corpus.
    ///
    /// Equal to [`aggregate`] over the same phrases.
    pub fn stats(&self) -> Stats {
        self.kinds.iter().copied().collect()
    }
}
