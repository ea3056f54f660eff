use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source document unavailable: {url} returned status {status}")]
    SourceStatus { url: String, status: u16 },

    #[error("Source document contains no table")]
    NoTable,

    #[error("I/O error on '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid CSS selector '{0}'")]
    Selector(String),

    #[error("Sentinel marker '{marker}' not found in target file")]
    MissingSentinel { marker: String },

    #[error("End sentinel (line {end_line}) does not follow start sentinel (line {start_line})")]
    MisorderedSentinels { start_line: usize, end_line: usize },
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure happened before any target file was consulted.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            SyncError::Http(_) | SyncError::SourceStatus { .. } | SyncError::NoTable
        )
    }

    pub fn is_sentinel_failure(&self) -> bool {
        matches!(
            self,
            SyncError::MissingSentinel { .. } | SyncError::MisorderedSentinels { .. }
        )
    }

    /// Process exit status: 2 for an unreachable source, 3 for sentinel problems, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_source_unavailable() {
            2
        } else if self.is_sentinel_failure() {
            3
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_failure_classes() {
        assert_eq!(SyncError::NoTable.exit_code(), 2);
        assert_eq!(
            SyncError::SourceStatus { url: "http://x".into(), status: 404 }.exit_code(),
            2
        );
        assert_eq!(
            SyncError::MissingSentinel { marker: "//--START".into() }.exit_code(),
            3
        );
        assert_eq!(
            SyncError::MisorderedSentinels { start_line: 4, end_line: 2 }.exit_code(),
            3
        );
        assert_eq!(SyncError::Config("bad".into()).exit_code(), 1);
    }
}
