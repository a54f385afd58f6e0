//! GenerateReport - Scores submitted answers into a risk profile.

use std::sync::Arc;

use crate::domain::assessment::{RiskEvaluator, RiskProfile, UserResponse};
use crate::ports::QuestionSource;

/// Command carrying the submitted answers.
#[derive(Debug, Clone, Default)]
pub struct GenerateReportCommand {
    pub answers: Vec<UserResponse>,
}

/// Handler for computing a risk profile.
pub struct GenerateReportHandler {
    source: Arc<dyn QuestionSource>,
}

impl GenerateReportHandler {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, cmd: GenerateReportCommand) -> RiskProfile {
        let catalog = self.source.load().await;
        let profile = RiskEvaluator::evaluate(&cmd.answers, &catalog);
        tracing::info!(
            answers = cmd.answers.len(),
            score = profile.score.value(),
            label = %profile.label,
            "Risk profile generated"
        );
        profile
    }
}
