//! Core types for pangram classification.
//!
//! This crate holds the data model shared by the analyzer, the corpus and
//! any presentation layer that renders results:
//!
//! - **Alphabet**: the fixed 26-letter universe used for coverage checks
//! - **Normalized text**: [`NormalizedPhrase`], letters `a`-`z` only
//! - **Letter tables**: [`LetterSet`] and [`LetterFrequency`], both indexed by
//!   alphabet position so no hashing is involved
//! - **Verdicts**: [`Classification`], its tag [`PhraseKind`] and the batch
//!   tally [`Stats`]
//!
//! Every result type is plain structured data and derives `Serialize`;
//! turning it into display text is left to the caller.

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The alphabet every phrase is checked against, in order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of letters in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

/// Returns the alphabet position of `c`, or `None` if it is not `a`-`z`.
#[inline(always)]
pub const fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Returns the letter at alphabet position `index`.
///
/// Panics in debug builds if `index >= ALPHABET_LEN`.
#[inline(always)]
pub const fn letter_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (b'a' + index as u8) as char
}

/// Iterates the alphabet in order.
#[inline]
pub fn alphabet() -> impl Iterator<Item = char> {
    (0..ALPHABET_LEN).map(letter_at)
}

/// Set of distinct alphabet letters, packed into the low 26 bits of a `u32`.
///
/// Bit `i` is set when the letter at alphabet position `i` is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every alphabet letter.
    pub const FULL: Self = Self(FULL_MASK);

    /// Collects the distinct letters of `text`. Non-alphabet characters are ignored.
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::EMPTY;
        for c in text.chars() {
            set.insert(c);
        }
        set
    }

    /// Adds `c` to the set. Returns `false` if `c` is not an alphabet letter.
    #[inline(always)]
    pub fn insert(&mut self, c: char) -> bool {
        match letter_index(c) {
            Some(i) => {
                self.0 |= 1 << i;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `c` is in the set.
    #[inline(always)]
    pub const fn contains(self, c: char) -> bool {
        match letter_index(c) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    /// Number of distinct letters.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no letter is present.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every alphabet letter is present.
    #[inline(always)]
    pub const fn is_full(self) -> bool {
        self.0 == FULL_MASK
    }

    /// Raw bit mask.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Present letters, in alphabet order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        alphabet().filter(move |&c| self.contains(c))
    }

    /// Alphabet letters absent from the set, in alphabet order.
    pub fn missing(self) -> impl Iterator<Item = char> {
        alphabet().filter(move |&c| !self.contains(c))
    }
}

impl Serialize for LetterSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// A letter paired with how many times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LetterCount {
    /// The letter.
    pub letter: char,
    /// Occurrence count.
    pub count: u32,
}

impl LetterCount {
    /// Creates a new letter count.
    #[inline(always)]
    pub const fn new(letter: char, count: u32) -> Self {
        Self { letter, count }
    }
}

/// Per-letter occurrence counts, indexed by alphabet position.
///
/// Built in a single pass over the text. Letters with a zero count are
/// treated as absent: [`LetterFrequency::get`] returns `None` for them and
/// serialization only emits letters that occur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: [u32; ALPHABET_LEN],
}

impl LetterFrequency {
    /// Counts every alphabet letter of `text`. Other characters are skipped.
    pub fn from_text(text: &str) -> Self {
        let mut freq = Self::default();
        for c in text.chars() {
            if let Some(i) = letter_index(c) {
                freq.counts[i] += 1;
            }
        }
        freq
    }

    /// Returns the count of `c`, or `None` if it never occurs.
    #[inline(always)]
    pub fn get(&self, c: char) -> Option<u32> {
        letter_index(c)
            .map(|i| self.counts[i])
            .filter(|&count| count > 0)
    }

    /// Returns the count of `c`, zero when absent.
    #[inline(always)]
    pub fn count(&self, c: char) -> u32 {
        self.get(c).unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Letters that occur at least once, with their counts, in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = LetterCount> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| LetterCount::new(letter_at(i), count))
    }

    /// Letters that occur more than once, in alphabet order.
    pub fn repeated(&self) -> impl Iterator<Item = LetterCount> + '_ {
        self.iter().filter(|lc| lc.count > 1)
    }

    /// The set of letters with a non-zero count.
    pub fn letters(&self) -> LetterSet {
        let mut set = LetterSet::EMPTY;
        for lc in self.iter() {
            set.insert(lc.letter);
        }
        set
    }
}

impl Serialize for LetterFrequency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|lc| (lc.letter, lc.count)))
    }
}

/// Text made only of alphabet letters, the form the classifier works on.
///
/// Every way of building one drops or rejects characters outside `a`-`z`,
/// so a `NormalizedPhrase` never holds anything else and its byte length is
/// its letter count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NormalizedPhrase(String);

impl NormalizedPhrase {
    /// The empty phrase.
    #[inline]
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Creates an empty phrase with room for `capacity` letters.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(String::with_capacity(capacity))
    }

    /// Wraps `text` if it already consists of alphabet letters only.
    ///
    /// Returns `None` on the first character outside `a`-`z`.
    pub fn try_new(text: &str) -> Option<Self> {
        text.bytes()
            .all(|b| b.is_ascii_lowercase())
            .then(|| Self(text.to_owned()))
    }

    /// Appends `c` if it is an alphabet letter. Returns whether it was kept.
    #[inline(always)]
    pub fn push(&mut self, c: char) -> bool {
        let keep = c.is_ascii_lowercase();
        if keep {
            self.0.push(c);
        }
        keep
    }

    /// Removes every letter, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Reserves room for at least `additional` more letters.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    /// Allocated capacity in letters.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// The letters as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the inner string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::ops::Deref for NormalizedPhrase {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedPhrase {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Extend<char> for NormalizedPhrase {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.push(c);
        }
    }
}

impl FromIterator<char> for NormalizedPhrase {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut phrase = Self::new();
        phrase.extend(iter);
        phrase
    }
}

impl PartialEq<str> for NormalizedPhrase {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedPhrase {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for NormalizedPhrase {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

/// Verdict for one normalized phrase.
///
/// Exactly one variant holds. A perfect pangram is never reported as a
/// plain [`Classification::Pangram`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub enum Classification {
    /// At least one alphabet letter is absent.
    #[serde(rename = "not-pangram")]
    NotPangram {
        /// Absent letters, in alphabet order.
        missing: Vec<char>,
    },
    /// Every letter is present and at least one repeats.
    #[serde(rename = "pangram")]
    Pangram {
        /// Letters occurring more than once, in alphabet order.
        repeated: Vec<LetterCount>,
    },
    /// Every letter occurs exactly once and nothing else remains.
    #[serde(rename = "perfect")]
    PerfectPangram,
}

impl Classification {
    /// Returns the fieldless tag of this verdict.
    #[inline]
    pub const fn kind(&self) -> PhraseKind {
        match self {
            Classification::NotPangram { .. } => PhraseKind::NotPangram,
            Classification::Pangram { .. } => PhraseKind::Pangram,
            Classification::PerfectPangram => PhraseKind::Perfect,
        }
    }

    /// Returns `true` for a plain pangram. Perfect pangrams return `false`.
    #[inline]
    pub const fn is_pangram(&self) -> bool {
        matches!(self, Classification::Pangram { .. })
    }

    /// Returns `true` for a perfect pangram.
    #[inline]
    pub const fn is_perfect(&self) -> bool {
        matches!(self, Classification::PerfectPangram)
    }
}

/// Tag identifying which [`Classification`] variant a phrase received.
///
/// The string forms (`perfect`, `pangram`, `not-pangram`) are the ones used
/// by query surfaces to select phrases by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhraseKind {
    /// Perfect pangram.
    #[serde(rename = "perfect")]
    Perfect,
    /// Pangram with repeated letters.
    #[serde(rename = "pangram")]
    Pangram,
    /// Missing at least one letter.
    #[serde(rename = "not-pangram")]
    NotPangram,
}

impl PhraseKind {
    /// All kinds, in reporting order.
    pub const ALL: [PhraseKind; 3] = [
        PhraseKind::Perfect,
        PhraseKind::Pangram,
        PhraseKind::NotPangram,
    ];

    /// Returns the query-surface spelling of this kind.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            PhraseKind::Perfect => "perfect",
            PhraseKind::Pangram => "pangram",
            PhraseKind::NotPangram => "not-pangram",
        }
    }
}

impl fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhraseKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhraseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind {
                input: s.to_owned(),
            })
    }
}

/// Error returned when a string names no [`PhraseKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown phrase kind {:?} (expected one of: perfect, pangram, not-pangram)",
            self.input
        )
    }
}

impl core::error::Error for UnknownKind {}

/// Verdict counts over a phrase collection.
///
/// Invariant: `total == perfect + pangram + not_pangram`. [`Stats::record`]
/// is the only way counts grow, so the invariant holds for every value
/// built through it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Perfect pangrams.
    pub perfect: usize,
    /// Pangrams with repeated letters.
    pub pangram: usize,
    /// Phrases missing at least one letter.
    pub not_pangram: usize,
    /// Phrases seen.
    pub total: usize,
}

impl Stats {
    /// Counts one phrase of the given kind.
    #[inline]
    pub fn record(&mut self, kind: PhraseKind) {
        match kind {
            PhraseKind::Perfect => self.perfect += 1,
            PhraseKind::Pangram => self.pangram += 1,
            PhraseKind::NotPangram => self.not_pangram += 1,
        }
        self.total += 1;
    }

    /// Returns the count for one kind.
    #[inline]
    pub const fn count(&self, kind: PhraseKind) -> usize {
        match kind {
            PhraseKind::Perfect => self.perfect,
            PhraseKind::Pangram => self.pangram,
            PhraseKind::NotPangram => self.not_pangram,
        }
    }

    /// Returns `true` if the per-kind counts add up to `total`.
    #[inline]
    pub const fn is_consistent(&self) -> bool {
        self.perfect + self.pangram + self.not_pangram == self.total
    }
}

impl FromIterator<PhraseKind> for Stats {
    fn from_iter<I: IntoIterator<Item = PhraseKind>>(iter: I) -> Self {
        let mut stats = Stats::default();
        for kind in iter {
            stats.record(kind);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_26_letters_in_order() {
        assert_eq!(ALPHABET.len(), ALPHABET_LEN);
        let collected: String = alphabet().collect();
        assert_eq!(collected, ALPHABET);
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index('A'), None);
        assert_eq!(letter_index('ç'), None);
        assert_eq!(letter_index(' '), None);
        assert_eq!(letter_at(0), 'a');
        assert_eq!(letter_at(25), 'z');
    }

    #[test]
    fn letter_set_insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert('q'));
        assert!(set.insert('q'));
        assert!(!set.insert('!'));
        assert!(set.contains('q'));
        assert!(!set.contains('r'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn letter_set_full() {
        let set = LetterSet::from_text(ALPHABET);
        assert!(set.is_full());
        assert_eq!(set, LetterSet::FULL);
        assert_eq!(set.len(), ALPHABET_LEN);
        assert_eq!(set.missing().count(), 0);
    }

    #[test]
    fn letter_set_missing_in_alphabet_order() {
        let set = LetterSet::from_text("zebra");
        let present: String = set.iter().collect();
        assert_eq!(present, "aberz");
        let missing: Vec<char> = set.missing().collect();
        assert_eq!(missing.len(), 21);
        assert_eq!(missing.first(), Some(&'c'));
        assert_eq!(missing.last(), Some(&'y'));
    }

    #[test]
    fn frequency_counts_single_pass() {
        let freq = LetterFrequency::from_text("banana");
        assert_eq!(freq.get('a'), Some(3));
        assert_eq!(freq.get('n'), Some(2));
        assert_eq!(freq.get('b'), Some(1));
        assert_eq!(freq.get('z'), None);
        assert_eq!(freq.count('z'), 0);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn frequency_repeated_alphabet_order() {
        let freq = LetterFrequency::from_text("banana");
        let repeated: Vec<LetterCount> = freq.repeated().collect();
        assert_eq!(
            repeated,
            vec![LetterCount::new('a', 3), LetterCount::new('n', 2)]
        );
    }

    #[test]
    fn frequency_letters_matches_set() {
        let text = "the quick brown fox";
        assert_eq!(
            LetterFrequency::from_text(text).letters(),
            LetterSet::from_text(text)
        );
    }

    #[test]
    fn frequency_serializes_present_letters_only() {
        let freq = LetterFrequency::from_text("abba");
        let json = serde_json::to_string(&freq).unwrap();
        assert_eq!(json, r#"{"a":2,"b":2}"#);
    }

    #[test]
    fn classification_kind() {
        assert_eq!(
            Classification::NotPangram { missing: vec!['x'] }.kind(),
            PhraseKind::NotPangram
        );
        assert_eq!(
            Classification::Pangram { repeated: vec![] }.kind(),
            PhraseKind::Pangram
        );
        assert_eq!(Classification::PerfectPangram.kind(), PhraseKind::Perfect);
    }

    #[test]
    fn perfect_is_not_plain_pangram() {
        let c = Classification::PerfectPangram;
        assert!(c.is_perfect());
        assert!(!c.is_pangram());
    }

    #[test]
    fn classification_serializes_with_type_tag() {
        let json = serde_json::to_string(&Classification::PerfectPangram).unwrap();
        assert_eq!(json, r#"{"type":"perfect"}"#);

        let json = serde_json::to_string(&Classification::NotPangram {
            missing: vec!['k', 'w'],
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"not-pangram","missing":["k","w"]}"#);

        let json = serde_json::to_string(&Classification::Pangram {
            repeated: vec![LetterCount::new('o', 4)],
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"pangram","repeated":[{"letter":"o","count":4}]}"#
        );
    }

    #[test]
    fn phrase_kind_parse() {
        assert_eq!("perfect".parse(), Ok(PhraseKind::Perfect));
        assert_eq!("pangram".parse(), Ok(PhraseKind::Pangram));
        assert_eq!("not-pangram".parse(), Ok(PhraseKind::NotPangram));

        let err = "Perfect".parse::<PhraseKind>().unwrap_err();
        assert_eq!(err.input, "Perfect");
        assert!(err.to_string().contains("not-pangram"));
    }

    #[test]
    fn phrase_kind_display_matches_parse() {
        for kind in PhraseKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn stats_record_keeps_invariant() {
        let mut stats = Stats::default();
        stats.record(PhraseKind::Perfect);
        stats.record(PhraseKind::NotPangram);
        stats.record(PhraseKind::NotPangram);
        assert_eq!(stats.perfect, 1);
        assert_eq!(stats.pangram, 0);
        assert_eq!(stats.not_pangram, 2);
        assert_eq!(stats.total, 3);
        assert!(stats.is_consistent());
        assert_eq!(stats.count(PhraseKind::NotPangram), 2);
    }

    #[test]
    fn stats_from_iter() {
        let stats: Stats = [PhraseKind::Pangram, PhraseKind::Pangram, PhraseKind::Perfect]
            .into_iter()
            .collect();
        assert_eq!(stats.pangram, 2);
        assert_eq!(stats.perfect, 1);
        assert_eq!(stats.total, 3);
    }

    #[test]
    fn stats_serializes_camel_case() {
        let stats: Stats = [PhraseKind::NotPangram].into_iter().collect();
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"perfect":0,"pangram":0,"notPangram":1,"total":1}"#
        );
    }

    #[test]
    fn normalized_phrase_rejects_non_letters() {
        assert_eq!(NormalizedPhrase::try_new("abc").map(|p| p.len()), Some(3));
        assert!(NormalizedPhrase::try_new("").is_some());
        assert!(NormalizedPhrase::try_new("abcdefghijklmnopqrstuvwxy!z").is_none());
        assert!(NormalizedPhrase::try_new("Abc").is_none());
        assert!(NormalizedPhrase::try_new("ç").is_none());
    }

    #[test]
    fn normalized_phrase_collect_drops_non_letters() {
        let phrase: NormalizedPhrase = "abcdefghijklmnopqrstuvwxy!z".chars().collect();
        assert_eq!(phrase, ALPHABET);
        assert_eq!(phrase.len(), ALPHABET_LEN);

        let mut phrase = NormalizedPhrase::with_capacity(8);
        assert!(phrase.push('q'));
        assert!(!phrase.push('Q'));
        assert!(!phrase.push(' '));
        assert_eq!(phrase, "q");
    }

    #[test]
    fn normalized_phrase_serializes_as_string() {
        let phrase: NormalizedPhrase = "hi there".chars().collect();
        assert_eq!(serde_json::to_string(&phrase).unwrap(), r#""hithere""#);
    }
}
