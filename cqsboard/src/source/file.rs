use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{DashboardError, Result};
use crate::models::DashboardSnapshot;

use super::{wire, SnapshotSource};

/// Reads the dashboard document from a local JSON export.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FileSource {
    async fn load(&self) -> Result<DashboardSnapshot> {
        tracing::debug!(path = %self.path.display(), "Reading dashboard document");

        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            DashboardError::SourceUnavailable(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))
        })?;

        wire::decode(&bytes)
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
