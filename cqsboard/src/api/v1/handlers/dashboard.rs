use axum::extract::{Path, State};
use axum_extra::extract::Query;

use crate::api::state::AppState;
use crate::api::v1::dto::{DashboardQuery, DashboardResponse, TrendResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::projection::RankOrder;
use crate::view::{trend_modal, DashboardSession};

/// `GET /api/v1/dashboard`
///
/// Loads the dashboard document once and composes every panel from that
/// single snapshot, including the ranking in each order and every video's
/// trend. When `selected` names a video, its trend is also returned as
/// `trend`. A failed load returns `503 source_unavailable` with no data.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    operation_id = "dashboard.get",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Composed dashboard", body = DashboardResponse),
        (status = 400, description = "Invalid order or selected id", body = ApiError),
        (status = 404, description = "Selected video not found", body = ApiError),
        (status = 503, description = "Dashboard source unavailable", body = ApiError),
    )
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResponse<DashboardResponse> {
    let order = match query.order.as_deref() {
        None | Some("") => RankOrder::default(),
        Some(raw) => match raw.parse::<RankOrder>() {
            Ok(order) => order,
            Err(e) => return ApiResponse::error(ErrorCode::InvalidRequest, e),
        },
    };

    let selected = match query.selected.as_deref() {
        None | Some("") => None,
        Some(raw) => match parse_video_id(raw) {
            Ok(id) => Some(id),
            Err(resp) => return resp,
        },
    };

    let snapshot = match state.source.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => return e.into(),
    };

    let mut session = DashboardSession::new(snapshot);
    session.set_order(order);
    if let Some(id) = selected {
        if let Err(e) = session.select(id) {
            return e.into();
        }
    }

    ApiResponse::success_with_meta(
        session.view().into(),
        ResponseMeta::loaded_from(state.source.kind()),
    )
}

/// `GET /api/v1/videos/{videoId}/history`
///
/// Trend data for one video, from a fresh load. The dashboard page does not
/// call this; it reads `trends` from its single dashboard response. A video
/// without history returns an empty point list rather than an error.
#[utoipa::path(
    get,
    path = "/api/v1/videos/{videoId}/history",
    tag = "dashboard",
    operation_id = "videos.history",
    params(
        ("videoId" = i64, Path, description = "Video ID from the dashboard document"),
    ),
    responses(
        (status = 200, description = "Trend points for the video", body = TrendResponse),
        (status = 400, description = "Malformed video id", body = ApiError),
        (status = 404, description = "Video not found", body = ApiError),
        (status = 503, description = "Dashboard source unavailable", body = ApiError),
    )
)]
pub async fn get_video_history(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> ApiResponse<TrendResponse> {
    let id = match parse_video_id(&video_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let snapshot = match state.source.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => return e.into(),
    };

    match snapshot.find_video(id) {
        Some(video) => ApiResponse::success_with_meta(
            trend_modal(&snapshot, video).into(),
            ResponseMeta::loaded_from(state.source.kind()),
        ),
        None => ApiResponse::error(ErrorCode::NotFound, format!("Video {id} not found")),
    }
}

fn parse_video_id<T: serde::Serialize>(raw: &str) -> Result<i64, ApiResponse<T>> {
    raw.trim().parse::<i64>().map_err(|_| {
        ApiResponse::error(
            ErrorCode::InvalidRequest,
            format!("Invalid video id: {raw}"),
        )
    })
}
