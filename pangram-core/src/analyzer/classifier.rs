//! Letter-coverage classification.
//!
//! Given a normalized phrase, computes which alphabet letters it covers and
//! how often each one occurs, then assigns exactly one [`Classification`].
//!
//! The perfect-pangram test runs first. A phrase that passes it is reported
//! as [`Classification::PerfectPangram`] only, never as a plain pangram.

use pangram_types::{
    alphabet, Classification, LetterFrequency, LetterSet, NormalizedPhrase, PhraseKind,
    ALPHABET_LEN,
};
use serde::Serialize;
use smallvec::SmallVec;

use crate::analyzer::normalizer::PhraseNormalizer;

/// Missing letters never exceed the alphabet, so this never spills.
pub type MissingLetters = SmallVec<[char; ALPHABET_LEN]>;

/// Letter coverage of one normalized phrase.
///
/// Holds the intermediate results callers use for reporting alongside the
/// verdict itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterProfile {
    /// Number of letters in the normalized phrase.
    pub length: usize,
    /// Distinct letters present.
    pub unique_letters: LetterSet,
    /// Number of distinct letters present.
    pub unique_count: usize,
    /// Occurrence count per present letter.
    pub frequency: LetterFrequency,
    /// Alphabet letters not present, in alphabet order.
    pub missing_letters: MissingLetters,
}

impl LetterProfile {
    /// Builds the profile of a normalized phrase.
    ///
    /// Frequency is counted in one pass; the unique set and missing letters
    /// are derived from it.
    pub fn of(normalized: &NormalizedPhrase) -> Self {
        let frequency = LetterFrequency::from_text(normalized);
        let unique_letters = frequency.letters();
        Self {
            length: normalized.len(),
            unique_letters,
            unique_count: unique_letters.len(),
            frequency,
            missing_letters: unique_letters.missing().collect(),
        }
    }

    /// Every letter present exactly once and nothing else.
    pub fn is_perfect(&self) -> bool {
        self.length == ALPHABET_LEN
            && self.unique_count == ALPHABET_LEN
            && alphabet().all(|c| self.frequency.get(c) == Some(1))
    }

    /// Every letter present at least once.
    #[inline]
    pub fn is_pangram(&self) -> bool {
        self.unique_letters.is_full()
    }

    /// Assigns the verdict for this profile.
    pub fn classification(&self) -> Classification {
        if self.is_perfect() {
            Classification::PerfectPangram
        } else if self.is_pangram() {
            Classification::Pangram {
                repeated: self.frequency.repeated().collect(),
            }
        } else {
            Classification::NotPangram {
                missing: self.missing_letters.to_vec(),
            }
        }
    }
}

/// Classifies a normalized phrase.
///
/// # Examples
///
/// ```
/// use pangram_core::analyzer::{classify, normalize};
/// use pangram_core::Classification;
///
/// assert_eq!(
///     classify(&normalize("zyxwvutsrqponmlkjihgfedcba")),
///     Classification::PerfectPangram
/// );
/// ```
pub fn classify(normalized: &NormalizedPhrase) -> Classification {
    LetterProfile::of(normalized).classification()
}

/// Full report for one raw phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Canonical letter-only form.
    pub normalized: NormalizedPhrase,
    /// Coverage details of `normalized`.
    #[serde(flatten)]
    pub profile: LetterProfile,
    /// The verdict.
    pub classification: Classification,
}

impl Analysis {
    /// Tag of the verdict.
    #[inline]
    pub fn kind(&self) -> PhraseKind {
        self.classification.kind()
    }
}

/// Normalizes and classifies one raw phrase.
///
/// This is the single pipeline shared by interactive checks, aggregation
/// and every corpus query.
pub fn analyze(phrase: &str) -> Analysis {
    let normalized = PhraseNormalizer::new().normalize(phrase);
    let profile = LetterProfile::of(&normalized);
    let classification = profile.classification();
    Analysis {
        normalized,
        profile,
        classification,
    }
}

/// Returns only the verdict tag of a raw phrase.
///
/// Reuses `buf` for the normalized text, so batch callers avoid one
/// allocation per phrase.
pub fn kind_of(phrase: &str, buf: &mut NormalizedPhrase) -> PhraseKind {
    PhraseNormalizer::new().normalize_into(phrase, buf);
    classify(buf).kind()
}
