use crate::error::ConfigError;
use crate::store::{normalize_ext, DEFAULT_FILE_EXT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "kartoteka.json";

/// Configuration for kartoteka, read from `kartoteka.json` in the output directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordConfig {
    /// Extension of the per-surname record files (e.g. ".txt", ".csv")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            file_ext: default_file_ext(),
        }
    }
}

impl RecordConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: RecordConfig = serde_json::from_str(&content)?;
        config.file_ext = normalize_ext(&config.file_ext);
        Ok(config)
    }

    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        self.file_ext = normalize_ext(ext);
    }
}
