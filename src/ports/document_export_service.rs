//! Document Export Service Port - report rendering interface.
//!
//! This port defines the contract for turning a laid-out `ReportDocument`
//! into a downloadable file. The application depends on this trait, while
//! adapters (like `PdfExportService`) provide the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::report::ReportDocument;

/// Port for exporting report documents.
///
/// # Contract
///
/// Implementations must:
/// - Render every block of the document, in order
/// - Treat block text as inline markup (already escaped by the builder)
/// - Paginate naturally when content exceeds a page
/// - Report clear errors for rendering failures
///
/// # Usage
///
/// ```rust,ignore
/// let export_service: &dyn DocumentExportService = get_service();
/// let pdf_bytes = export_service.to_pdf(&document).await?;
/// ```
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Render the document to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering fails.
    async fn to_pdf(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError>;
}

/// MIME type of exported reports.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Exported document with content and download metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
}

impl ExportedDocument {
    /// Create from PDF bytes.
    pub fn from_pdf(pdf_bytes: Vec<u8>, base_filename: &str) -> Self {
        Self {
            content: pdf_bytes,
            content_type: PDF_CONTENT_TYPE.to_string(),
            filename: format!("{}.pdf", base_filename),
        }
    }

    /// `Content-Disposition` header value for an attachment download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Font could not be registered with the PDF writer.
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// Conversion to PDF failed.
    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    /// Rendering task did not complete.
    #[error("Rendering task failed: {0}")]
    TaskFailed(String),
}

impl ExportError {
    /// Create a font error.
    pub fn font_unavailable(reason: impl Into<String>) -> Self {
        Self::FontUnavailable(reason.into())
    }

    /// Create a PDF conversion error.
    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    /// Create a task error.
    pub fn task_failed(reason: impl Into<String>) -> Self {
        Self::TaskFailed(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
