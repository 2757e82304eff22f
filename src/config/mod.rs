//! Configuration layering
//!
//! Implements the 4-layer configuration merge:
//! 1. Built-in defaults
//! 2. User config (~/.config/cn/merge.toml)
//! 3. Repo config (.cn/merge.toml)
//! 4. CLI flags

mod defaults;
mod effective;
mod merge;

pub use defaults::BuiltinDefaults;
pub use effective::{ConfigOrigin, ConfigSource, EffectiveConfig};
pub use merge::{deep_merge, merge_layers};

use cnmerge_classifier::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Repo config location, relative to the working directory.
pub const REPO_CONFIG_PATH: &str = ".cn/merge.toml";

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Classifier(#[from] cnmerge_classifier::ConfigError),
}

/// Merger configuration, as read from the merged layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Group table, prefix and separator.
    #[serde(flatten)]
    pub classifier: ClassifierConfig,

    /// Collapse exact duplicates of unrecognized classes.
    #[serde(default)]
    pub dedupe_unknown: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            dedupe_unknown: false,
        }
    }
}

impl MergeConfig {
    /// Parse a single TOML document (no layering).
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: MergeConfig = toml::from_str(s).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.classifier.validate()?;
        Ok(config)
    }
}

/// Default user config path: `$XDG_CONFIG_HOME/cn/merge.toml`, falling back
/// to `$HOME/.config/cn/merge.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir).join("cn").join("merge.toml"));
    }
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join("cn").join("merge.toml"))
}
