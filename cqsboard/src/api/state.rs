use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::source::{self, SnapshotSource};
use crate::upload::{SimulatedUploader, Uploader};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Loaded once per dashboard request; nothing is cached between requests.
    pub source: Arc<dyn SnapshotSource>,
    pub uploader: Arc<dyn Uploader>,
}

impl AppState {
    pub fn new(
        config: Config,
        source: Arc<dyn SnapshotSource>,
        uploader: Arc<dyn Uploader>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            source,
            uploader,
        }
    }

    /// Wire up the configured source and a simulated uploader that stops when
    /// `cancel` fires.
    pub fn from_config(config: Config, cancel: CancellationToken) -> Self {
        let source = source::from_config(&config.source);
        let uploader = Arc::new(SimulatedUploader::new(&config.upload, cancel));
        Self::new(config, source, uploader)
    }
}
