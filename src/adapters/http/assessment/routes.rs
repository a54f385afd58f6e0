//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    download_report, generate_pdf_from_profile, generate_report, list_questions,
    AssessmentAppState,
};

/// Creates the assessment router with all endpoints.
///
/// `/api/load-questions` and `/api/generate-report` are aliases kept for
/// older frontends.
pub fn assessment_router(state: AssessmentAppState) -> Router {
    Router::new()
        .route("/api/questions", get(list_questions))
        .route("/api/load-questions", get(list_questions))
        .route("/api/calculate", post(generate_report))
        .route("/api/generate-report", post(generate_report))
        .route("/api/download-report", post(download_report))
        .route("/api/generate-pdf-from-profile", post(generate_pdf_from_profile))
        .with_state(state)
}
