//! HTTP handlers serving the single-page frontend.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use tokio::fs;

pub const INDEX_FILE: &str = "index.html";
pub const SCRIPT_FILE: &str = "Script.js";

const WELCOME_MESSAGE: &str = "Welcome! Please make sure index.html and Script.js exist.";
const SCRIPT_NOT_FOUND: &str = "Script.js not found";

const EXTERNAL_SCRIPT_TAGS: [&str; 2] = [
    r#"<script type="text/babel" src="/Script.js"></script>"#,
    "<script type='text/babel' src='/Script.js'></script>",
];

#[derive(Clone)]
pub struct FrontendAppState {
    static_dir: Arc<PathBuf>,
}

impl FrontendAppState {
    pub fn new(static_dir: impl AsRef<Path>) -> Self {
        Self {
            static_dir: Arc::new(static_dir.as_ref().to_path_buf()),
        }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.static_dir.join(name)
    }
}

/// GET / - index.html with Script.js inlined for in-browser Babel
pub async fn index(State(state): State<FrontendAppState>) -> Response {
    let html = fs::read_to_string(state.file(INDEX_FILE)).await;
    let script = fs::read_to_string(state.file(SCRIPT_FILE)).await;

    match (html, script) {
        (Ok(html), Ok(script)) => Html(inline_script(&html, &script)).into_response(),
        (html, script) => {
            if let Some(e) = html.as_ref().err().or(script.as_ref().err()) {
                tracing::warn!(dir = %state.static_dir.display(), error = %e, "Frontend assets unavailable");
            }
            (StatusCode::OK, Json(json!({ "message": WELCOME_MESSAGE }))).into_response()
        }
    }
}

/// GET /Script.js - The raw frontend script
pub async fn script(State(state): State<FrontendAppState>) -> Response {
    match fs::read(state.file(SCRIPT_FILE)).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/javascript")],
            bytes,
        )
            .into_response(),
        Err(_) => (StatusCode::OK, Json(json!({ "error": SCRIPT_NOT_FOUND }))).into_response(),
    }
}

/// Replaces the external `/Script.js` tag with an inline Babel block.
pub fn inline_script(html: &str, script: &str) -> String {
    let inline = format!("<script type=\"text/babel\">\n{}\n</script>", script);
    EXTERNAL_SCRIPT_TAGS
        .iter()
        .fold(html.to_string(), |page, tag| page.replace(tag, &inline))
}
