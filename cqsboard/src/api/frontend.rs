use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

/// Dashboard and upload pages, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "frontend"]
struct FrontendAssets;

pub async fn serve_root() -> Response {
    serve_asset_path("")
}

pub async fn serve_path(Path(path): Path<String>) -> Response {
    serve_asset_path(&path)
}

fn serve_asset_path(path: &str) -> Response {
    let requested = path.trim_start_matches('/').trim_end_matches('/');
    let target = if requested.is_empty() {
        "index.html"
    } else {
        requested
    };

    if target.contains("..") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    if let Some(response) = response_for_file(target) {
        return response;
    }

    // Page routes without an extension: "/upload" serves upload.html, anything
    // else falls back to the dashboard.
    if !target.contains('.') {
        if let Some(response) = response_for_file(&format!("{target}.html")) {
            return response;
        }
        if let Some(response) = response_for_file("index.html") {
            return response;
        }
    }

    StatusCode::NOT_FOUND.into_response()
}

fn response_for_file(path: &str) -> Option<Response> {
    let file = FrontendAssets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    let mut response = Response::new(Body::from(file.data.into_owned()));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(mime.as_ref()).ok()?,
    );
    Some(response)
}
