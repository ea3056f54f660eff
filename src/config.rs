use crate::constants::{
    DEFAULT_END_MARKER, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL, DEFAULT_START_MARKER,
    DEFAULT_TIMEOUT_SECONDS,
};
use crate::error::{Result, SyncError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything a sync run needs to know. Missing keys in the config file fall
/// back to the defaults in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub source_url: String,
    pub output_path: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
    pub timeout_seconds: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl SyncConfig {
    /// Load from a TOML file, or use the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    SyncError::Config(format!(
                        "Failed to read config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                Self::from_toml(&content)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_marker.trim().is_empty() || self.end_marker.trim().is_empty() {
            return Err(SyncError::Config("sentinel markers must not be empty".into()));
        }
        if self.start_marker.contains(&self.end_marker) || self.end_marker.contains(&self.start_marker) {
            return Err(SyncError::Config(format!(
                "start marker '{}' and end marker '{}' must not contain each other",
                self.start_marker, self.end_marker
            )));
        }
        if self.source_url.trim().is_empty() {
            return Err(SyncError::Config("source_url must not be empty".into()));
        }
        Ok(())
    }
}
