//! Tracing setup for the `pangram` binary.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary (or an embedding application).

use std::env;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PANGRAM_LOG";

/// Builds the filter from `PANGRAM_LOG`, falling back to `fallback`.
///
/// An unparsable fallback degrades to `info`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    resolve_filter(env::var(LOG_ENV).ok().as_deref(), fallback)
}

/// Picks the first of `directives` and `fallback` that parses, then `info`.
pub fn resolve_filter(directives: Option<&str>, fallback: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(fallback).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Installs a stderr `fmt` subscriber.
///
/// Events go to stderr so stdout stays machine readable. Calling this more
/// than once keeps the first subscriber.
pub fn init_tracing(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_fallback_degrades_to_info() {
        assert_eq!(resolve_filter(None, "pangram_core=[").to_string(), "info");
    }

    #[test]
    fn fallback_used_when_unset() {
        assert_eq!(resolve_filter(None, "debug").to_string(), "debug");
    }

    #[test]
    fn env_directives_win_over_fallback() {
        assert_eq!(resolve_filter(Some("trace"), "debug").to_string(), "trace");
    }

    #[test]
    fn unparsable_env_directives_use_fallback() {
        assert_eq!(resolve_filter(Some("pangram_core=["), "warn").to_string(), "warn");
    }
}
