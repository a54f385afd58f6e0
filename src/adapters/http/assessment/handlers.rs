//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    ExportProfileReportCommand, ExportProfileReportHandler, ExportReportCommand,
    ExportReportHandler, GenerateReportCommand, GenerateReportHandler, ListQuestionsHandler,
};
use crate::domain::assessment::{ProfileSubmission, UserResponse};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{DocumentExportService, ExportedDocument, QuestionSource};

use super::dto::{ErrorResponse, QuestionListResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentAppState {
    list_questions: Arc<ListQuestionsHandler>,
    generate_report: Arc<GenerateReportHandler>,
    export_report: Arc<ExportReportHandler>,
    export_profile_report: Arc<ExportProfileReportHandler>,
}

impl AssessmentAppState {
    pub fn new(
        questions: Arc<dyn QuestionSource>,
        exporter: Arc<dyn DocumentExportService>,
    ) -> Self {
        Self {
            list_questions: Arc::new(ListQuestionsHandler::new(questions.clone())),
            generate_report: Arc::new(GenerateReportHandler::new(questions.clone())),
            export_report: Arc::new(ExportReportHandler::new(questions, exporter.clone())),
            export_profile_report: Arc::new(ExportProfileReportHandler::new(exporter)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - List every questionnaire row
pub async fn list_questions(State(state): State<AssessmentAppState>) -> Response {
    let catalog = state.list_questions.handle().await;
    (StatusCode::OK, Json(QuestionListResponse::from(catalog))).into_response()
}

/// POST /api/calculate - Score answers into a risk profile
pub async fn generate_report(
    State(state): State<AssessmentAppState>,
    Json(answers): Json<Vec<UserResponse>>,
) -> Response {
    let profile = state
        .generate_report
        .handle(GenerateReportCommand { answers })
        .await;
    (StatusCode::OK, Json(profile)).into_response()
}

/// POST /api/download-report - Score answers and download the PDF report
pub async fn download_report(
    State(state): State<AssessmentAppState>,
    Json(answers): Json<Vec<UserResponse>>,
) -> Response {
    match state
        .export_report
        .handle(ExportReportCommand { answers })
        .await
    {
        Ok(document) => attachment(document),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/generate-pdf-from-profile - Render a submitted profile as PDF
pub async fn generate_pdf_from_profile(
    State(state): State<AssessmentAppState>,
    Json(profile): Json<ProfileSubmission>,
) -> Response {
    match state
        .export_profile_report
        .handle(ExportProfileReportCommand { profile })
        .await
    {
        Ok(document) => attachment(document),
        Err(e) => handle_assessment_error(e),
    }
}

fn attachment(document: ExportedDocument) -> Response {
    let disposition = document.content_disposition();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::RenderFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::render_failed(error.message())),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::from(&error)),
        )
            .into_response(),
    }
}
