//! ParseUpload - Decodes an uploaded spreadsheet or CSV file.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{TabularData, TabularError, TabularFormat, TabularParser};

/// Message returned when the file extension is not accepted.
pub const UNSUPPORTED_UPLOAD_MESSAGE: &str = "Only Excel or CSV files are allowed.";

/// Command carrying one uploaded file.
#[derive(Debug, Clone)]
pub struct ParseUploadCommand {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct ParseUploadResult {
    pub filename: String,
    pub data: TabularData,
}

/// Handler for upload parsing.
pub struct ParseUploadHandler {
    parser: Arc<dyn TabularParser>,
}

impl ParseUploadHandler {
    pub fn new(parser: Arc<dyn TabularParser>) -> Self {
        Self { parser }
    }

    pub async fn handle(&self, cmd: ParseUploadCommand) -> Result<ParseUploadResult, DomainError> {
        if TabularFormat::from_filename(&cmd.filename).is_none() {
            tracing::warn!(filename = %cmd.filename, "Rejected upload with unsupported extension");
            return Err(DomainError::new(
                ErrorCode::UnsupportedFileType,
                UNSUPPORTED_UPLOAD_MESSAGE,
            )
            .with_detail("filename", cmd.filename));
        }

        let data = self
            .parser
            .parse(&cmd.filename, cmd.bytes)
            .await
            .map_err(|e| upload_error(&cmd.filename, e))?;

        tracing::info!(filename = %cmd.filename, rows = data.len(), "Upload parsed");
        Ok(ParseUploadResult {
            filename: cmd.filename,
            data,
        })
    }
}

fn upload_error(filename: &str, err: TabularError) -> DomainError {
    tracing::warn!(filename, error = %err, "Failed to parse upload");
    let code = match err {
        TabularError::UnsupportedFormat(_) => ErrorCode::UnsupportedFileType,
        _ => ErrorCode::UnreadableFile,
    };
    let message = match code {
        ErrorCode::UnsupportedFileType => UNSUPPORTED_UPLOAD_MESSAGE.to_string(),
        _ => err.to_string(),
    };
    DomainError::new(code, message).with_detail("filename", filename)
}
