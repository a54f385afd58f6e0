//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `tabular` - CSV and spreadsheet decoding (csv, calamine)
//! - `questions` - Questionnaire loading from the data file
//! - `document` - PDF rendering (printpdf)
//! - `http` - REST API (axum)

pub mod document;
pub mod http;
pub mod questions;
pub mod tabular;

pub use document::{PageLayout, PdfExportService};
pub use questions::FileQuestionSource;
pub use tabular::SpreadsheetParser;
