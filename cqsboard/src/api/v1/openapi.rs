use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "cqsboard API",
        version = "1.0.0",
        description = "Comment-quality marketing dashboard: video ranking, discussion breakdowns, per-video trends and CSV uploads.",
    ),
    paths(
        handlers::health::health_check,
        handlers::dashboard::get_dashboard,
        handlers::dashboard::get_video_history,
        handlers::uploads::create_upload,
        handlers::uploads::get_upload,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Health
        handlers::health::HealthData,
        handlers::health::SourceStatus,
        // Dashboard
        crate::projection::RankOrder,
        dto::DashboardQuery,
        dto::DashboardResponse,
        dto::VideoResponse,
        dto::RankingResponse,
        dto::RankingItemResponse,
        dto::DonutChartResponse,
        dto::DonutSliceResponse,
        dto::FocusResponse,
        dto::FocusCardResponse,
        dto::TrendResponse,
        dto::TrendPointResponse,
        dto::AxisDomain,
        // Uploads
        dto::V1UploadState,
        dto::UploadResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "dashboard", description = "Composed dashboard and per-video trends"),
        (name = "uploads", description = "Simulated CSV uploads"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
