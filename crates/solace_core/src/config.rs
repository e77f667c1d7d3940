//! Configuration for Solace.
//!
//! Loads settings from ~/.config/solace/config.toml or uses defaults.
//! Every field has a serde default so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::SolaceError;

/// Config file name under the user config directory.
const CONFIG_FILE: &str = "solace/config.toml";

/// Turn log file name under the user data directory.
const LOG_FILE: &str = "solace/conversation_log.jsonl";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolaceConfig {
    /// Path of the append-only JSONL turn log
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Maximum turns kept in the in-memory transcript
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// Whether turns are written to the log file at all
    #[serde(default = "default_logging_enabled")]
    pub logging_enabled: bool,
}

fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE)
}

fn default_max_turns() -> usize {
    50
}

fn default_logging_enabled() -> bool {
    true
}

impl Default for SolaceConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            max_turns: default_max_turns(),
            logging_enabled: default_logging_enabled(),
        }
    }
}

impl SolaceConfig {
    /// Default config file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    /// Load from the default location; missing file means defaults.
    pub fn load() -> Result<Self, SolaceError> {
        Self::load_from(Self::default_path())
    }

    /// Load from a specific path; missing file means defaults,
    /// malformed file is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SolaceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: SolaceConfig = toml::from_str(&raw)
            .map_err(|e| SolaceError::Config(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
