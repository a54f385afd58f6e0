//! Document adapters - Rendering report documents.
//!
//! - `PdfExportService` - Renders `ReportDocument`s to PDF with printpdf
//! - `PageLayout` - Page geometry and type sizes used for rendering

mod layout;
mod metrics;
mod pdf_export_service;

pub use layout::PageLayout;
pub use pdf_export_service::PdfExportService;
