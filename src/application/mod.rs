//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ExportProfileReportCommand, ExportProfileReportHandler, ExportReportCommand,
    ExportReportHandler, GenerateReportCommand, GenerateReportHandler, ListQuestionsHandler,
    ParseUploadCommand, ParseUploadHandler, ParseUploadResult,
};
