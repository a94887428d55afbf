pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tokio_util::sync::CancellationToken;
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::api::state::AppState;
    use crate::config::Config;
    use crate::error::{DashboardError, Result};
    use crate::models::DashboardSnapshot;
    use crate::source::{MockSource, SnapshotSource};
    use crate::upload::SimulatedUploader;

    struct OfflineSource;

    #[async_trait]
    impl SnapshotSource for OfflineSource {
        async fn load(&self) -> Result<DashboardSnapshot> {
            Err(DashboardError::SourceUnavailable(
                "http://internal:9000/output.json responded with 500".into(),
            ))
        }

        fn kind(&self) -> &'static str {
            "http"
        }
    }

    fn test_state(source: Arc<dyn SnapshotSource>) -> AppState {
        let config = Config::for_mock();
        let uploader = Arc::new(SimulatedUploader::new(
            &config.upload,
            CancellationToken::new(),
        ));
        AppState::new(config, source, uploader)
    }

    async fn get(uri: &str, source: Arc<dyn SnapshotSource>) -> axum::response::Response {
        create_router(test_state(source))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_source_kind() {
        let response = get("/api/v1/health", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["source"]["kind"], "mock");
    }

    #[tokio::test]
    async fn openapi_json_is_valid() {
        let response = get("/api/v1/openapi.json", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(
            version.starts_with("3"),
            "OpenAPI version should start with 3, got: {version}"
        );
        assert!(json["paths"]["/api/v1/dashboard"].is_object());
    }

    #[tokio::test]
    async fn dashboard_success_envelope_has_data_no_error() {
        let response = get("/api/v1/dashboard", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json.get("error").is_none());
        assert_eq!(json["meta"]["source"], "mock");
        assert_eq!(json["data"]["ranking"]["items"].as_array().unwrap().len(), 5);
        assert_eq!(json["data"]["ranking"]["items"][0]["video"]["id"], 1);
        assert!(json["data"].get("trend").is_none());
    }

    #[tokio::test]
    async fn dashboard_by_recency_puts_latest_first() {
        let response = get("/api/v1/dashboard?order=recency", Arc::new(MockSource)).await;

        let json = body_json(response).await;
        assert_eq!(json["data"]["ranking"]["order"], "recency");
        assert_eq!(json["data"]["ranking"]["items"][0]["video"]["id"], 6);
    }

    #[tokio::test]
    async fn dashboard_with_selection_includes_trend() {
        let response = get("/api/v1/dashboard?selected=1", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["trend"]["video"]["id"], 1);
        assert_eq!(json["data"]["trend"]["points"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn unknown_order_is_invalid_request() {
        let response = get("/api/v1/dashboard?order=views", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn unknown_selection_is_not_found() {
        let response = get("/api/v1/dashboard?selected=999", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn failed_load_returns_503_without_data() {
        let response = get("/api/v1/dashboard", Arc::new(OfflineSource)).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "source_unavailable");
        assert_eq!(json["error"]["message"], "Failed to fetch dashboard data");
    }

    #[tokio::test]
    async fn history_for_video_without_points_is_empty() {
        let response = get("/api/v1/videos/7/history", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["isEmpty"], true);
        assert_eq!(json["data"]["points"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn history_rejects_non_numeric_id() {
        let response = get("/api/v1/videos/abc/history", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_upload_is_not_found() {
        let uri = format!("/api/v1/uploads/{}", uuid::Uuid::new_v4());
        let response = get(&uri, Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unmatched_api_path_is_not_found_envelope() {
        let response = get("/api/v1/nope", Arc::new(MockSource)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(json["error"]["message"], "No route for /api/v1/nope");
    }
}
