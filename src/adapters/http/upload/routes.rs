//! HTTP routes for file uploads.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{upload_file, UploadAppState};

/// Creates the upload router; bodies above `max_upload_bytes` are rejected.
pub fn upload_router(state: UploadAppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
