//! HTTP routes for frontend assets.

use axum::{routing::get, Router};

use super::handlers::{index, script, FrontendAppState};

pub fn frontend_router(state: FrontendAppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/Script.js", get(script))
        .with_state(state)
}
