//! Phrase analysis pipeline.
//!
//! This module provides the two stages every phrase goes through:
//! - **Normalizer**: Reduces raw text to lowercase `a`-`z` letters
//! - **Classifier**: Computes letter coverage and assigns the verdict

pub mod classifier;
pub mod normalizer;

pub use classifier::{analyze, classify, kind_of, Analysis, LetterProfile, MissingLetters};
pub use normalizer::{normalize, PhraseNormalizer};
