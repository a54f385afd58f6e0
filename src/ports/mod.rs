//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionSource` - Loads the questionnaire catalog
//! - `TabularParser` - Decodes spreadsheet and CSV bytes
//! - `DocumentExportService` - Renders report documents to PDF

mod document_export_service;
mod question_source;
mod tabular_parser;

pub use document_export_service::{
    DocumentExportService, ExportError, ExportedDocument, PDF_CONTENT_TYPE,
};
pub use question_source::QuestionSource;
pub use tabular_parser::{TabularData, TabularError, TabularFormat, TabularParser};
