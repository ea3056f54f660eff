use crate::error::Result;
use async_trait::async_trait;

/// Where the weapon table HTML comes from
#[async_trait]
pub trait DocumentSourcePort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// The file holding the generated region
pub trait TargetFilePort: Send + Sync {
    fn read(&self) -> Result<String>;

    fn write(&self, content: &str) -> Result<()>;

    /// Human-readable location, used in logs and the report
    fn describe(&self) -> String;

    /// True when `write` does not touch the target
    fn is_dry_run(&self) -> bool {
        false
    }
}
