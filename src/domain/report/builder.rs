//! Report assembly from risk profiles.

use crate::domain::assessment::{
    unique_recommendation_texts, Finding, ProfileSubmission, RiskProfile,
};
use crate::domain::foundation::RiskScore;

use super::document::{HeadingLevel, ReportDocument};
use super::markup::escape;

pub const REPORT_TITLE: &str = "AI Risk Assessment Report";

const SECTION_GAP: f32 = 12.0;
const ENTRY_GAP: f32 = 6.0;

/// Lays out risk profiles as report documents.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Report for a freshly computed profile.
    ///
    /// Findings carry their impact line; recommendations are deduplicated.
    pub fn from_profile(profile: &RiskProfile) -> ReportDocument {
        let mut doc = Self::header(profile.score, profile.label.as_str(), &profile.summary);

        if !profile.detailed_risks.is_empty() {
            doc.heading(HeadingLevel::Section, "Key Findings:");
            for risk in &profile.detailed_risks {
                doc.paragraph(format!(
                    "{}<br/><i>Impact: {}</i>",
                    finding_line(risk),
                    escape(&risk.impact)
                ))
                .spacer(ENTRY_GAP);
            }
            doc.spacer(SECTION_GAP);
        }

        let recommendations = unique_recommendation_texts(&profile.recommendations);
        if !recommendations.is_empty() {
            doc.heading(HeadingLevel::Section, "Recommendations:");
            bullets(&mut doc, recommendations);
        }

        doc
    }

    /// Report for a profile posted back by the frontend.
    ///
    /// Frontend display fields win over the computed ones when present.
    pub fn from_submission(submission: &ProfileSubmission) -> ReportDocument {
        let mut doc = Self::header(
            RiskScore::from_percentage(submission.score),
            submission.display_label(),
            submission.display_summary(),
        );

        if !submission.findings.is_empty() {
            doc.heading(HeadingLevel::Section, "Key Findings:");
            bullets(&mut doc, submission.findings.iter().map(String::as_str));
            doc.spacer(SECTION_GAP);
        } else if !submission.detailed_risks.is_empty() {
            doc.heading(HeadingLevel::Section, "Key Findings:");
            for risk in &submission.detailed_risks {
                doc.paragraph(finding_line(risk)).spacer(ENTRY_GAP);
            }
            doc.spacer(SECTION_GAP);
        }

        if !submission.actions.is_empty() {
            doc.heading(HeadingLevel::Section, "Recommended Actions:");
            bullets(&mut doc, submission.actions.iter().map(String::as_str));
        } else if !submission.recommendations.is_empty() {
            doc.heading(HeadingLevel::Section, "Recommendations:");
            bullets(&mut doc, unique_recommendation_texts(&submission.recommendations));
        }

        doc
    }

    /// Title, score line and executive summary shared by both variants.
    fn header(score: RiskScore, label: &str, summary: &str) -> ReportDocument {
        let mut doc = ReportDocument::new(REPORT_TITLE);
        doc.title_block(REPORT_TITLE)
            .spacer(SECTION_GAP)
            .heading(
                HeadingLevel::Primary,
                format!("Risk Score: {}% - {}", score, escape(label)),
            )
            .spacer(SECTION_GAP)
            .heading(HeadingLevel::Section, "Executive Summary:")
            .paragraph(escape(summary))
            .spacer(SECTION_GAP);
        doc
    }
}

fn finding_line(risk: &Finding) -> String {
    format!("<b>{}</b>: {}", escape(&risk.domain), escape(&risk.finding))
}

fn bullets<'a>(doc: &mut ReportDocument, items: impl IntoIterator<Item = &'a str>) {
    for item in items {
        doc.bullet(escape(item)).spacer(ENTRY_GAP);
    }
}
