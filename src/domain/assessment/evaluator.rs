//! Risk Evaluator - weighted scoring of questionnaire answers.

use crate::domain::foundation::RiskScore;

use super::answer::UserResponse;
use super::profile::{Finding, Recommendation, RiskLabel, RiskProfile};
use super::question::QuestionCatalog;

/// Domain shown when a flagged answer references an unknown question.
pub const UNKNOWN_DOMAIN: &str = "Unknown";
/// Finding text shown when the question has no text.
pub const UNKNOWN_QUESTION: &str = "Unknown Question";
/// Impact shown when the question has no risk description.
pub const UNKNOWN_IMPACT: &str = "Risk not specified in database";
/// Recommendation used when the question carries none.
pub const DEFAULT_RECOMMENDATION: &str = "Implement oversight controls.";

/// More flagged answers than this adds [`HIGH_VOLUME_CAVEAT`] to the summary.
pub const HIGH_VOLUME_FINDINGS_THRESHOLD: usize = 15;
pub const HIGH_VOLUME_CAVEAT: &str = " (High number of individual risk findings).";

/// Calculator for the weighted risk profile.
pub struct RiskEvaluator;

impl RiskEvaluator {
    /// Scores the answers and collects findings for every flagged answer.
    ///
    /// # Edge Cases
    /// - Empty answers or zero total weight: score 0, "Low Risk"
    /// - Unknown question id: finding with placeholder text
    /// - Unrecognized answer value: scores 0, not flagged
    pub fn evaluate(answers: &[UserResponse], questions: &QuestionCatalog) -> RiskProfile {
        let mut total = 0.0;
        let mut max_total = 0.0;
        let mut detailed_risks = Vec::new();
        let mut recommendations = Vec::new();

        for response in answers {
            total += response.answer.unit_score() * response.weight;
            max_total += response.weight;

            if !response.answer.is_flagged() {
                continue;
            }

            let question = questions.get(&response.question_id);
            let domain = question
                .and_then(|q| q.domain())
                .unwrap_or(UNKNOWN_DOMAIN)
                .to_string();

            detailed_risks.push(Finding {
                question_id: response.question_id.clone(),
                domain: domain.clone(),
                finding: question
                    .and_then(|q| q.text())
                    .unwrap_or(UNKNOWN_QUESTION)
                    .to_string(),
                impact: question
                    .and_then(|q| q.risk_description())
                    .unwrap_or(UNKNOWN_IMPACT)
                    .to_string(),
                user_response: response.answer.to_string(),
            });

            recommendations.push(Recommendation {
                domain,
                text: question
                    .and_then(|q| q.recommendation())
                    .unwrap_or(DEFAULT_RECOMMENDATION)
                    .to_string(),
            });
        }

        let percentage = Self::percentage(total, max_total);
        let label = RiskLabel::from_percentage(percentage);

        let mut summary = label.summary().to_string();
        if detailed_risks.len() > HIGH_VOLUME_FINDINGS_THRESHOLD {
            summary.push_str(HIGH_VOLUME_CAVEAT);
        }

        RiskProfile {
            score: RiskScore::from_percentage(percentage),
            label,
            summary,
            detailed_risks,
            recommendations,
        }
    }

    /// `total / max_total * 100`, or 0 when there is no weight to divide by.
    fn percentage(total: f64, max_total: f64) -> f64 {
        if max_total == 0.0 {
            0.0
        } else {
            total / max_total * 100.0
        }
    }
}
