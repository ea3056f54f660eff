use crate::app::ports::TargetFilePort;
use crate::error::{Result, SyncError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Target file on disk, rewritten in place
pub struct FsTargetFile {
    path: PathBuf,
}

impl FsTargetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TargetFilePort for FsTargetFile {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| SyncError::io(&self.path, e))
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| SyncError::io(&self.path, e))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads the real target but prints the patched file to stdout instead of writing it
pub struct StdoutTarget {
    inner: FsTargetFile,
}

impl StdoutTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: FsTargetFile::new(path),
        }
    }
}

impl TargetFilePort for StdoutTarget {
    fn read(&self) -> Result<String> {
        self.inner.read()
    }

    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| SyncError::io("<stdout>", e))
    }

    fn describe(&self) -> String {
        format!("{} (dry run)", self.inner.describe())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_target_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weapon_db.rs");
        fs::write(&path, "before\n").unwrap();

        let target = FsTargetFile::new(&path);
        assert_eq!(target.read().unwrap(), "before\n");
        target.write("after\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "after\n");
        assert_eq!(target.path(), path.as_path());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let target = FsTargetFile::new(dir.path().join("missing.rs"));
        let err = target.read().unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_dry_run_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weapon_db.rs");
        fs::write(&path, "before\n").unwrap();

        let target = StdoutTarget::new(&path);
        assert!(target.is_dry_run());
        target.write("after\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "before\n");
    }
}
