//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod upload;

pub use assessment::{
    ExportProfileReportCommand, ExportProfileReportHandler, ExportReportCommand,
    ExportReportHandler, GenerateReportCommand, GenerateReportHandler, ListQuestionsHandler,
    ANSWERS_REPORT_FILENAME, PROFILE_REPORT_FILENAME,
};
pub use upload::{
    ParseUploadCommand, ParseUploadHandler, ParseUploadResult, UNSUPPORTED_UPLOAD_MESSAGE,
};
