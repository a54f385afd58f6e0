//! printpdf based export service adapter.
//!
//! Renders `ReportDocument`s with the PDF built-in Helvetica faces, so no
//! font files or external tools are needed at runtime.
//!
//! # Architecture
//!
//! This adapter implements the `DocumentExportService` port. Layout is
//! computed by the pure `layout` module; this file only draws the placed
//! text runs.

use async_trait::async_trait;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use crate::domain::report::{ReportDocument, TextStyle};
use crate::ports::{DocumentExportService, ExportError};

use super::layout::{layout_document, PageLayout};

const LAYER_NAME: &str = "Layer 1";

/// Export service producing PDF bytes with printpdf.
///
/// # Example
///
/// ```rust,ignore
/// let service = PdfExportService::new();
/// let pdf = service.to_pdf(&document).await?;
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfExportService {
    layout: PageLayout,
}

impl PdfExportService {
    /// Create a service rendering US Letter pages.
    pub fn new() -> Self {
        Self {
            layout: PageLayout::letter(),
        }
    }

    /// Use a custom page geometry.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Render synchronously. printpdf documents are not `Send`, so callers
    /// on the async runtime go through [`DocumentExportService::to_pdf`].
    pub fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError> {
        let pages = layout_document(document, &self.layout);
        let width = to_mm(self.layout.page_width);
        let height = to_mm(self.layout.page_height);

        let (doc, first_page, first_layer) =
            PdfDocument::new(document.title(), width, height, LAYER_NAME);
        let fonts = FontSet::register(&doc)?;

        for (idx, page) in pages.iter().enumerate() {
            let layer = if idx == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_idx, layer_idx) = doc.add_page(width, height, LAYER_NAME);
                doc.get_page(page_idx).get_layer(layer_idx)
            };

            for run in &page.runs {
                layer.use_text(
                    run.text.as_str(),
                    run.size,
                    to_mm(run.x),
                    to_mm(run.y),
                    fonts.for_style(run.style),
                );
            }
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::pdf_failed(e.to_string()))
    }
}

#[async_trait]
impl DocumentExportService for PdfExportService {
    async fn to_pdf(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError> {
        let service = self.clone();
        let document = document.clone();

        let bytes = tokio::task::spawn_blocking(move || service.render(&document))
            .await
            .map_err(|e| ExportError::task_failed(e.to_string()))??;

        tracing::debug!(bytes = bytes.len(), "Rendered report PDF");
        Ok(bytes)
    }
}

/// The four Helvetica faces registered on a document.
struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    bold_italic: IndirectFontRef,
}

impl FontSet {
    fn register(doc: &PdfDocumentReference) -> Result<Self, ExportError> {
        let add = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| ExportError::font_unavailable(e.to_string()))
        };
        Ok(Self {
            regular: add(BuiltinFont::Helvetica)?,
            bold: add(BuiltinFont::HelveticaBold)?,
            italic: add(BuiltinFont::HelveticaOblique)?,
            bold_italic: add(BuiltinFont::HelveticaBoldOblique)?,
        })
    }

    fn for_style(&self, style: TextStyle) -> &IndirectFontRef {
        match (style.bold, style.italic) {
            (false, false) => &self.regular,
            (true, false) => &self.bold,
            (false, true) => &self.italic,
            (true, true) => &self.bold_italic,
        }
    }
}

fn to_mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
