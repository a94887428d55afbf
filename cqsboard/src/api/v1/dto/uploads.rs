//! Upload DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::upload::{UploadState, UploadStatus};

/// Wire format: `"uploading"`, `"completed"` or `"cancelled"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum V1UploadState {
    /// Simulated transfer in progress.
    Uploading,
    /// Reached 100%.
    Completed,
    /// Interrupted by server shutdown.
    Cancelled,
}

impl From<UploadState> for V1UploadState {
    fn from(state: UploadState) -> Self {
        match state {
            UploadState::Uploading => V1UploadState::Uploading,
            UploadState::Completed => V1UploadState::Completed,
            UploadState::Cancelled => V1UploadState::Cancelled,
        }
    }
}

/// Response body for `POST /v1/uploads` and `GET /v1/uploads/{uploadId}`.
///
/// Wire format:
/// ```json
/// { "uploadId": "550e8400-...", "fileName": "comments.csv", "sizeBytes": 2048,
///   "progress": 35, "status": "uploading", "createdAt": "2025-10-19T12:00:00Z" }
/// ```
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Upload tracking ID (UUID v4).
    pub upload_id: String,
    pub file_name: String,
    pub size_bytes: usize,
    /// Progress in percent, 0–100.
    pub progress: u8,
    pub status: V1UploadState,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<UploadStatus> for UploadResponse {
    fn from(status: UploadStatus) -> Self {
        Self {
            upload_id: status.id.to_string(),
            file_name: status.file_name,
            size_bytes: status.size_bytes,
            progress: status.progress,
            status: status.state.into(),
            created_at: status.created_at,
            completed_at: status.completed_at,
        }
    }
}
