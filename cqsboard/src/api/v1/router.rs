use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::state::AppState;

use super::handlers;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn v1_router(state: AppState) -> Router<AppState> {
    let body_limit = state.config.upload.max_file_size + MULTIPART_OVERHEAD;

    let videos = Router::new().route(
        "/{videoId}/history",
        get(handlers::dashboard::get_video_history),
    );

    let uploads = Router::new()
        .route("/", post(handlers::uploads::create_upload))
        .route("/{uploadId}", get(handlers::uploads::get_upload))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .nest("/videos", videos)
        .nest("/uploads", uploads)
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .fallback(handlers::route_not_found)
}
