//! HTTP handlers for file uploads.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::assessment::ErrorResponse;
use crate::application::handlers::upload::{ParseUploadCommand, ParseUploadHandler};
use crate::ports::TabularParser;

use super::dto::{UploadErrorResponse, UploadResponse};

/// Multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

#[derive(Clone)]
pub struct UploadAppState {
    parse_upload: Arc<ParseUploadHandler>,
}

impl UploadAppState {
    pub fn new(parser: Arc<dyn TabularParser>) -> Self {
        Self {
            parse_upload: Arc::new(ParseUploadHandler::new(parser)),
        }
    }
}

/// POST /upload - Parse an uploaded spreadsheet or CSV file
pub async fn upload_file(State(state): State<UploadAppState>, mut multipart: Multipart) -> Response {
    let cmd = match read_file_field(&mut multipart).await {
        Ok(Some(cmd)) => cmd,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Missing multipart field `{}`",
                    FILE_FIELD
                ))),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Malformed multipart upload");
            return (e.status(), Json(ErrorResponse::bad_request(e.body_text()))).into_response();
        }
    };

    match state.parse_upload.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(UploadResponse::new(result.filename, result.data.rows)),
        )
            .into_response(),
        Err(e) => (StatusCode::OK, Json(UploadErrorResponse::new(e.message()))).into_response(),
    }
}

async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<Option<ParseUploadCommand>, axum::extract::multipart::MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(ParseUploadCommand {
            filename,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}
