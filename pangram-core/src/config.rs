//! Runtime configuration.
//!
//! Read from a TOML file with a single `[pangram]` table:
//!
//! ```toml
//! [pangram]
//! data_file = "pangramas.txt"
//! log_filter = "info"
//! ```
//!
//! A missing or invalid file is not fatal: defaults apply and the reason is
//! reported as a [`ConfigFallback`]. `PANGRAM_DATA` overrides `data_file`
//! after the file is read.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "pangram.toml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV: &str = "PANGRAM_CONFIG";

/// Environment variable overriding the phrase store path.
pub const DATA_ENV: &str = "PANGRAM_DATA";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
struct ConfigFile {
    pangram: PangramConfig,
}

/// Settings for the phrase store and logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PangramConfig {
    /// JSON phrase store location.
    pub data_file: PathBuf,
    /// Fallback `tracing` filter when `PANGRAM_LOG` is unset.
    pub log_filter: String,
}

impl Default for PangramConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("pangramas.txt"),
            log_filter: "info".to_string(),
        }
    }
}

/// Why a configuration file was not used.
#[derive(Debug, Error)]
pub enum ConfigFallback {
    /// The file could not be read, usually because it does not exist.
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not a valid configuration.
    #[error("invalid TOML in {}: {source}", .path.display())]
    Invalid {
        /// Configuration file path.
        path: PathBuf,
        /// Parse error.
        source: toml::de::Error,
    },
}

impl ConfigFallback {
    /// Emits the fallback as a log event.
    ///
    /// An unreadable file is routine and logs at `debug`; an invalid one logs
    /// at `warn`.
    pub fn log(&self) {
        match self {
            ConfigFallback::Unreadable { path, source } => {
                tracing::debug!(path = %path.display(), "using default pangram config: {source}");
            }
            ConfigFallback::Invalid { path, source } => {
                tracing::warn!(path = %path.display(), "invalid pangram config TOML: {source}");
            }
        }
    }
}

impl PangramConfig {
    /// `PANGRAM_CONFIG` if set, otherwise [`DEFAULT_CONFIG_PATH`].
    pub fn default_path() -> PathBuf {
        env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Reads and parses `path`.
    ///
    /// # Errors
    ///
    /// Returns why the file cannot be used. Nothing is logged, so a caller
    /// that loads configuration before installing a subscriber can report
    /// the fallback afterwards with [`ConfigFallback::log`].
    pub fn try_load(path: &Path) -> Result<Self, ConfigFallback> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigFallback::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigFallback::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads from `path`, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded pangram config");
                config
            }
            Err(fallback) => {
                fallback.log();
                Self::default()
            }
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is not a valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<ConfigFile>(contents).map(|file| file.pangram)
    }

    /// Applies `PANGRAM_DATA` if set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(data) = env::var_os(DATA_ENV) {
            self.data_file = PathBuf::from(data);
        }
        self
    }
}
