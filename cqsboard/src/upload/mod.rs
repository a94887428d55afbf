//! Simulated CSV upload.
//!
//! Uploads are accepted, validated for shape (name, type, size) and then
//! "processed" by a fake progress timer. Nothing is parsed or stored.

mod simulated;
mod tracker;
pub mod validate;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;

pub use simulated::SimulatedUploader;
pub use tracker::UploadTracker;

/// A file handed over by the upload page.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadState {
    Uploading,
    Completed,
    /// The server shut down before the simulation finished.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadStatus {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: usize,
    /// 0..=100
    pub progress: u8,
    pub state: UploadState,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Accepts uploaded files.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Validate and start processing `file`, returning its initial status.
    async fn submit(&self, file: UploadFile) -> Result<UploadStatus>;

    /// Current status of a previously submitted upload.
    async fn status(&self, id: Uuid) -> Option<UploadStatus>;
}
