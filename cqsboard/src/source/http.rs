use async_trait::async_trait;

use crate::error::{DashboardError, Result};
use crate::models::DashboardSnapshot;

use super::{wire, SnapshotSource};

/// Fetches the dashboard document from a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::SourceUnavailable(format!(
                "{} responded with {}",
                self.url, status
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    async fn load(&self) -> Result<DashboardSnapshot> {
        tracing::debug!(url = %self.url, "Fetching dashboard document");

        let bytes = self
            .fetch()
            .await
            .map_err(DashboardError::into_source_unavailable)?;

        wire::decode(&bytes)
    }

    fn kind(&self) -> &'static str {
        "http"
    }
}
