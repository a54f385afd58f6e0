//! ExportReport - Renders PDF reports for computed and submitted profiles.

use std::sync::Arc;

use crate::domain::assessment::{ProfileSubmission, RiskEvaluator, UserResponse};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::{ReportBuilder, ReportDocument};
use crate::ports::{DocumentExportService, ExportedDocument, QuestionSource};

/// Download name for reports computed from answers.
pub const ANSWERS_REPORT_FILENAME: &str = "AI_Risk_Report";

/// Download name for reports built from a submitted profile.
pub const PROFILE_REPORT_FILENAME: &str = "Bizcom_AI_Risk_Report";

/// Command to score answers and render the result.
#[derive(Debug, Clone, Default)]
pub struct ExportReportCommand {
    pub answers: Vec<UserResponse>,
}

/// Handler for `answers -> PDF`.
pub struct ExportReportHandler {
    source: Arc<dyn QuestionSource>,
    exporter: Arc<dyn DocumentExportService>,
}

impl ExportReportHandler {
    pub fn new(source: Arc<dyn QuestionSource>, exporter: Arc<dyn DocumentExportService>) -> Self {
        Self { source, exporter }
    }

    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportedDocument, DomainError> {
        let catalog = self.source.load().await;
        let profile = RiskEvaluator::evaluate(&cmd.answers, &catalog);
        let document = ReportBuilder::from_profile(&profile);
        render(self.exporter.as_ref(), &document, ANSWERS_REPORT_FILENAME).await
    }
}

/// Command carrying a profile posted back by the frontend.
#[derive(Debug, Clone)]
pub struct ExportProfileReportCommand {
    pub profile: ProfileSubmission,
}

/// Handler for `profile -> PDF`.
pub struct ExportProfileReportHandler {
    exporter: Arc<dyn DocumentExportService>,
}

impl ExportProfileReportHandler {
    pub fn new(exporter: Arc<dyn DocumentExportService>) -> Self {
        Self { exporter }
    }

    pub async fn handle(
        &self,
        cmd: ExportProfileReportCommand,
    ) -> Result<ExportedDocument, DomainError> {
        let document = ReportBuilder::from_submission(&cmd.profile);
        render(self.exporter.as_ref(), &document, PROFILE_REPORT_FILENAME).await
    }
}

async fn render(
    exporter: &dyn DocumentExportService,
    document: &ReportDocument,
    filename: &str,
) -> Result<ExportedDocument, DomainError> {
    let bytes = exporter.to_pdf(document).await.map_err(|e| {
        tracing::error!(error = %e, "Report rendering failed");
        DomainError::new(ErrorCode::RenderFailed, e.to_string())
    })?;
    tracing::info!(filename, bytes = bytes.len(), "Report exported");
    Ok(ExportedDocument::from_pdf(bytes, filename))
}
