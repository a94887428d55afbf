pub mod dashboard;
pub(crate) mod health;
pub mod uploads;

use axum::extract::OriginalUri;

use crate::api::v1::response::{ApiResponse, ErrorCode};

pub use health::health_check;

/// Fallback for `/api/v1/*` paths with no route, so they never reach the
/// frontend's page fallback.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiResponse<()> {
    ApiResponse::error(ErrorCode::NotFound, format!("No route for {}", uri.path()))
}
