use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::error::Result;

use super::validate::validate_csv;
use super::{UploadFile, UploadState, UploadStatus, UploadTracker, Uploader};

/// Smallest and largest simulated progress step, in percent.
const STEP_RANGE: std::ops::RangeInclusive<u8> = 10..=19;

/// Pretends to upload files: validates them, discards the bytes and walks a
/// progress counter to 100% on a timer.
#[derive(Clone)]
pub struct SimulatedUploader {
    tracker: UploadTracker,
    max_file_size: usize,
    tick: Duration,
    completion_delay: Duration,
    cancel: CancellationToken,
}

impl SimulatedUploader {
    pub fn new(config: &UploadConfig, cancel: CancellationToken) -> Self {
        Self {
            tracker: UploadTracker::new(config.tracked_uploads),
            max_file_size: config.max_file_size,
            tick: Duration::from_millis(config.tick_interval_ms),
            completion_delay: Duration::from_millis(config.completion_delay_ms),
            cancel,
        }
    }

    pub fn tracker(&self) -> &UploadTracker {
        &self.tracker
    }

    async fn run(self, id: Uuid) {
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    self.mark_cancelled(&id);
                    return;
                }
                _ = tokio::time::sleep(self.tick) => {}
            }

            let step = rand::thread_rng().gen_range(STEP_RANGE);
            let Some(status) = self.tracker.update(&id, |s| s.progress = advance(s.progress, step))
            else {
                tracing::debug!(upload_id = %id, "Upload evicted before completion");
                return;
            };

            tracing::debug!(upload_id = %id, progress = status.progress, "Upload progress");
            if status.progress >= 100 {
                break;
            }
        }

        tokio::select! {
            _ = self.cancel.cancelled() => {
                self.mark_cancelled(&id);
                return;
            }
            _ = tokio::time::sleep(self.completion_delay) => {}
        }

        if let Some(status) = self.tracker.update(&id, |s| {
            s.state = UploadState::Completed;
            s.completed_at = Some(Utc::now());
        }) {
            tracing::info!(
                upload_id = %id,
                file_name = %status.file_name,
                size_bytes = status.size_bytes,
                "Upload complete"
            );
        }
    }

    fn mark_cancelled(&self, id: &Uuid) {
        self.tracker.update(id, |s| s.state = UploadState::Cancelled);
        tracing::info!(upload_id = %id, "Upload cancelled by shutdown");
    }
}

fn advance(progress: u8, step: u8) -> u8 {
    progress.saturating_add(step).min(100)
}

#[async_trait]
impl Uploader for SimulatedUploader {
    async fn submit(&self, file: UploadFile) -> Result<UploadStatus> {
        validate_csv(&file, self.max_file_size)?;

        let status = UploadStatus {
            id: Uuid::new_v4(),
            file_name: file.file_name,
            size_bytes: file.bytes.len(),
            progress: 0,
            state: UploadState::Uploading,
            created_at: Utc::now(),
            completed_at: None,
        };
        self.tracker.put(status.clone());

        tracing::info!(
            upload_id = %status.id,
            file_name = %status.file_name,
            size_bytes = status.size_bytes,
            "Upload accepted"
        );

        tokio::spawn(self.clone().run(status.id));

        Ok(status)
    }

    async fn status(&self, id: Uuid) -> Option<UploadStatus> {
        self.tracker.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    fn fast_config() -> UploadConfig {
        UploadConfig {
            tick_interval_ms: 1,
            completion_delay_ms: 1,
            ..UploadConfig::default()
        }
    }

    fn csv(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            content_type: Some("text/csv".to_string()),
            bytes: b"video_id,comment\n1,great tutorial\n".to_vec(),
        }
    }

    async fn wait_for_state(uploader: &SimulatedUploader, id: Uuid, state: UploadState) -> UploadStatus {
        for _ in 0..500 {
            if let Some(status) = uploader.status(id).await {
                if status.state == state {
                    return status;
                }
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("upload {id} never reached {state:?}");
    }

    #[test]
    fn advance_clamps_at_one_hundred() {
        assert_eq!(advance(0, 10), 10);
        assert_eq!(advance(95, 19), 100);
        assert_eq!(advance(250, 19), 100);
    }

    #[tokio::test]
    async fn submitted_upload_completes() {
        let uploader = SimulatedUploader::new(&fast_config(), CancellationToken::new());

        let initial = uploader.submit(csv("comments.csv")).await.unwrap();
        assert_eq!(initial.progress, 0);
        assert_eq!(initial.state, UploadState::Uploading);

        let done = wait_for_state(&uploader, initial.id, UploadState::Completed).await;
        assert_eq!(done.progress, 100);
        assert!(done.completed_at.is_some());
        assert_eq!(done.file_name, "comments.csv");
    }

    #[tokio::test]
    async fn invalid_upload_is_not_tracked() {
        let uploader = SimulatedUploader::new(&fast_config(), CancellationToken::new());
        let mut file = csv("slides.pptx");
        file.content_type = None;

        let err = uploader.submit(file).await.unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));
        assert!(uploader.tracker().is_empty());
    }

    #[tokio::test]
    async fn shutdown_cancels_running_upload() {
        let config = UploadConfig {
            tick_interval_ms: 60_000,
            ..UploadConfig::default()
        };
        let cancel = CancellationToken::new();
        let uploader = SimulatedUploader::new(&config, cancel.clone());

        let initial = uploader.submit(csv("slow.csv")).await.unwrap();
        cancel.cancel();

        let status = wait_for_state(&uploader, initial.id, UploadState::Cancelled).await;
        assert!(status.progress < 100);
    }
}
