//! Phrase collections and the queries run over them.
//!
//! A [`PhraseCorpus`] is built once from a phrase source and then only read.
//! Every phrase is classified at load time through the same pipeline as an
//! interactive check, and the verdict tags are cached next to the raw text.
//!
//! Queries:
//! - [`PhraseCorpus::stats`] and the free function [`aggregate`]
//! - [`PhraseCorpus::by_kind`]: phrases of one kind, original order kept
//! - [`PhraseCorpus::random`]: a random phrase, optionally of one kind
//! - [`PhraseCorpus::search`]: case-insensitive substring search

mod api;
mod search;
mod stats;
mod types;

pub use stats::{aggregate, aggregate_source};
pub use types::PhraseCorpus;
