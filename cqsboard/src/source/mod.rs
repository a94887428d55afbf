//! Data Source Adapter: one retrieval of the dashboard document per call.

mod file;
mod http;
mod mock;
pub mod wire;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{SourceConfig, SourceLocation};
use crate::error::Result;
use crate::models::DashboardSnapshot;

pub use file::FileSource;
pub use http::HttpSource;
pub use mock::{mock_snapshot, MockSource};

/// Loads a complete [`DashboardSnapshot`].
///
/// Implementations make exactly one retrieval attempt and never retry. Every
/// failure, whether transport or decoding, surfaces as
/// [`DashboardError::SourceUnavailable`](crate::error::DashboardError::SourceUnavailable).
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self) -> Result<DashboardSnapshot>;

    /// Short label for logs and the health endpoint.
    fn kind(&self) -> &'static str;
}

/// Build the source named by the configuration.
pub fn from_config(config: &SourceConfig) -> Arc<dyn SnapshotSource> {
    match &config.location {
        SourceLocation::Mock => Arc::new(MockSource),
        SourceLocation::File(path) => Arc::new(FileSource::new(path.clone())),
        SourceLocation::Http(url) => Arc::new(HttpSource::new(url.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn from_config_picks_matching_source() {
        let cases = [
            (SourceLocation::Mock, "mock"),
            (SourceLocation::File(PathBuf::from("output.json")), "file"),
            (
                SourceLocation::Http("http://localhost/output.json".to_string()),
                "http",
            ),
        ];

        for (location, kind) in cases {
            let source = from_config(&SourceConfig { location });
            assert_eq!(source.kind(), kind);
        }
    }
}
