#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use cqsboard::api::{create_router, AppState};
use cqsboard::config::{Config, SourceLocation};
use cqsboard::source::{self, SnapshotSource};
use cqsboard::upload::SimulatedUploader;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture file as bytes
pub fn load_fixture(name: &str) -> Vec<u8> {
    let path = fixture_path(name);
    fs::read(&path).unwrap_or_else(|e| panic!("Failed to load fixture '{name}': {e}"))
}

/// Load a fixture file as JSON
pub fn load_json_fixture(name: &str) -> serde_json::Value {
    serde_json::from_slice(&load_fixture(name))
        .unwrap_or_else(|e| panic!("Fixture '{name}' is not JSON: {e}"))
}

/// Test configuration reading the dashboard document from `location`.
pub fn config_for(location: SourceLocation) -> Config {
    let mut config = Config::for_mock();
    config.source.location = location;
    config
}

/// Router backed by `config`, with uploads tied to `cancel`.
pub fn app_with(config: Config, cancel: CancellationToken) -> Router {
    let source: Arc<dyn SnapshotSource> = source::from_config(&config.source);
    let uploader = Arc::new(SimulatedUploader::new(&config.upload, cancel));
    create_router(AppState::new(config, source, uploader))
}

pub fn app_for(location: SourceLocation) -> Router {
    app_with(config_for(location), CancellationToken::new())
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router never fails")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A `multipart/form-data` request carrying one file field.
pub fn multipart_upload(
    field: &str,
    file_name: &str,
    content_type: &str,
    contents: &[u8],
) -> Request<Body> {
    const BOUNDARY: &str = "cqsboard-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/v1/uploads")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
