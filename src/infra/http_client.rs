use crate::app::ports::DocumentSourcePort;
use crate::error::{Result, SyncError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub struct ReqwestDocumentSource {
    client: reqwest::Client,
}

impl ReqwestDocumentSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentSourcePort for ReqwestDocumentSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        debug!(%url, status = status.as_u16(), "Received response");
        if !status.is_success() {
            return Err(SyncError::SourceStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}
