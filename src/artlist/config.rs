use crate::error::{ArtlistError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST_FILE: &str = "artists.json";
const DEFAULT_REPORT_FILE: &str = "output.txt";

/// File names used inside the data directory, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtlistConfig {
    /// Canonical JSON list
    #[serde(default = "default_list_file")]
    pub list_file: String,

    /// Grouped text report
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_list_file() -> String {
    DEFAULT_LIST_FILE.to_string()
}

fn default_report_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

impl Default for ArtlistConfig {
    fn default() -> Self {
        Self {
            list_file: default_list_file(),
            report_file: default_report_file(),
        }
    }
}

impl ArtlistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| ArtlistError::storage(&config_path, e))?;
        let config: ArtlistConfig =
            serde_json::from_str(&content).map_err(|e| ArtlistError::format(&config_path, e))?;
        debug!(?config, "config loaded");
        Ok(config)
    }
}
