//! Phrase normalization, pangram classification and phrase-list statistics.
//!
//! The pipeline has three stages:
//!
//! 1. [`analyzer::normalize`] reduces any string to lowercase `a`-`z`
//! 2. [`analyzer::classify`] checks letter coverage and returns one
//!    [`Classification`]
//! 3. [`corpus::aggregate`] tallies verdicts over a phrase list into
//!    [`Stats`]
//!
//! [`analyzer::analyze`] runs stages 1 and 2 together and is what every
//! batch query uses, so a phrase gets the same verdict whether it is
//! checked alone or as part of a list.
//!
//! ```
//! use pangram_core::analyzer::analyze;
//! use pangram_core::PhraseKind;
//!
//! assert_eq!(analyze("Zyxwvutsrqponmlkjihgfedcba").kind(), PhraseKind::Perfect);
//! assert_eq!(analyze("Olá, mundo").kind(), PhraseKind::NotPangram);
//! ```

pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod logging;
pub mod store;

pub use pangram_types::{
    Classification, LetterCount, LetterFrequency, LetterSet, NormalizedPhrase, PhraseKind, Stats,
    UnknownKind,
    ALPHABET, ALPHABET_LEN,
};
