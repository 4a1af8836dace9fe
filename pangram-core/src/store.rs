//! Phrase store boundary.
//!
//! The core only needs an ordered list of raw strings. [`PhraseSource`] is
//! that contract; [`JsonFileStore`] reads it from a JSON file and in-memory
//! lists implement it directly.
//!
//! A load either returns every phrase or an error. No partial list is ever
//! handed to the aggregator.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors raised while reading a phrase store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be read.
    #[error("failed to read phrase store {}: {source}", .path.display())]
    Io {
        /// Store location.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not a JSON phrase list.
    #[error("invalid phrase store {}: {source}", .path.display())]
    Parse {
        /// Store location.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Anything that can hand over an ordered list of raw phrases.
pub trait PhraseSource {
    /// Reads the whole list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be read in full.
    fn load(&self) -> Result<Vec<String>, StoreError>;
}

impl<S: AsRef<str>> PhraseSource for [S] {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.iter().map(|s| s.as_ref().to_owned()).collect())
    }
}

impl<S: AsRef<str>> PhraseSource for Vec<S> {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        self.as_slice().load()
    }
}

/// On-disk layouts accepted by [`JsonFileStore`].
///
/// Either a bare array of strings or an object carrying the array under
/// `phrases` (or the legacy `lista_strings` key).
#[derive(Deserialize)]
#[serde(untagged)]
enum StoreDocument {
    List(Vec<String>),
    Object {
        #[serde(alias = "lista_strings")]
        phrases: Vec<String>,
    },
}

impl StoreDocument {
    fn into_phrases(self) -> Vec<String> {
        match self {
            StoreDocument::List(phrases) | StoreDocument::Object { phrases } => phrases,
        }
    }
}

/// Phrase list stored as a UTF-8 JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store reading from `path`. Nothing is read until [`PhraseSource::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a phrase list from JSON text.
    fn parse(&self, contents: &str) -> Result<Vec<String>, StoreError> {
        serde_json::from_str::<StoreDocument>(contents)
            .map(StoreDocument::into_phrases)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}

impl PhraseSource for JsonFileStore {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let phrases = self.parse(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            phrases = phrases.len(),
            "phrase store read"
        );
        Ok(phrases)
    }
}
