use axum::extract::{Multipart, Path, State};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::v1::dto::UploadResponse;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::upload::UploadFile;

/// `POST /api/v1/uploads`
///
/// Accepts a multipart form with a single `file` field holding a CSV file.
/// The file is validated and a simulated upload starts; poll
/// `GET /api/v1/uploads/{uploadId}` for progress. Returns 202 Accepted.
#[utoipa::path(
    post,
    path = "/api/v1/uploads",
    tag = "uploads",
    operation_id = "uploads.create",
    request_body(content_type = "multipart/form-data", content = String, description = "CSV file in a `file` field"),
    responses(
        (status = 202, description = "Upload accepted", body = UploadResponse),
        (status = 400, description = "Missing, empty, oversized or non-CSV file", body = ApiError),
    )
)]
pub async fn create_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResponse<UploadResponse> {
    let mut file: Option<UploadFile> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return ApiResponse::error(
                    ErrorCode::InvalidRequest,
                    format!("Invalid multipart body: {e}"),
                );
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = match field.bytes().await {
            Ok(b) => b,
            Err(e) => {
                return ApiResponse::error(
                    ErrorCode::InvalidRequest,
                    format!("Failed to read file: {e}"),
                );
            }
        };

        file = Some(UploadFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let Some(file) = file else {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Missing required 'file' field");
    };

    match state.uploader.submit(file).await {
        Ok(status) => ApiResponse::accepted(status.into()),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/uploads/{uploadId}`
#[utoipa::path(
    get,
    path = "/api/v1/uploads/{uploadId}",
    tag = "uploads",
    operation_id = "uploads.get",
    params(
        ("uploadId" = String, Path, description = "Upload ID (UUID v4)"),
    ),
    responses(
        (status = 200, description = "Upload progress", body = UploadResponse),
        (status = 400, description = "Malformed upload id", body = ApiError),
        (status = 404, description = "Upload not found", body = ApiError),
    )
)]
pub async fn get_upload(
    State(state): State<AppState>,
    Path(upload_id): Path<String>,
) -> ApiResponse<UploadResponse> {
    let id = match Uuid::parse_str(&upload_id) {
        Ok(id) => id,
        Err(_) => {
            return ApiResponse::error(
                ErrorCode::InvalidRequest,
                format!("Invalid upload id: {upload_id}"),
            );
        }
    };

    match state.uploader.status(id).await {
        Some(status) => ApiResponse::success(status.into()),
        None => ApiResponse::error(ErrorCode::NotFound, format!("Upload {upload_id} not found")),
    }
}
