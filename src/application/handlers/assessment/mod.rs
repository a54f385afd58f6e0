//! Assessment application handlers.
//!
//! Question listing, scoring and report export.

mod export_report;
mod generate_report;
mod list_questions;

pub use export_report::{
    ExportProfileReportCommand, ExportProfileReportHandler, ExportReportCommand,
    ExportReportHandler, ANSWERS_REPORT_FILENAME, PROFILE_REPORT_FILENAME,
};
pub use generate_report::{GenerateReportCommand, GenerateReportHandler};
pub use list_questions::ListQuestionsHandler;
