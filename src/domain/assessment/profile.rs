//! Risk profile types produced by the evaluator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RiskScore;

/// Qualitative risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskLabel {
    /// Lower bound (inclusive) of the medium band.
    pub const MEDIUM_THRESHOLD: f64 = 30.0;
    /// Lower bound (inclusive) of the high band.
    pub const HIGH_THRESHOLD: f64 = 70.0;

    /// Classifies a percentage.
    /// - Low: < 30
    /// - Medium: 30 to < 70
    /// - High: >= 70
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < Self::MEDIUM_THRESHOLD {
            RiskLabel::Low
        } else if percentage < Self::HIGH_THRESHOLD {
            RiskLabel::Medium
        } else {
            RiskLabel::High
        }
    }

    /// Canned executive summary for this band.
    pub fn summary(&self) -> &'static str {
        match self {
            RiskLabel::Low => {
                "The organization has effective AI controls in place. Continue monitoring."
            }
            RiskLabel::Medium => {
                "Several AI governance gaps exist. A roadmap for compliance should be established."
            }
            RiskLabel::High => {
                "CRITICAL: Significant gaps in AI Governance and Security detected. Immediate intervention required."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low Risk",
            RiskLabel::Medium => "Medium Risk",
            RiskLabel::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged answer paired with its question metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finding {
    pub question_id: String,
    pub domain: String,
    pub finding: String,
    pub impact: String,
    pub user_response: String,
}

/// Remediation advice attached to a flagged answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub domain: String,
    pub text: String,
}

/// Complete output of an evaluation.
///
/// `recommendations` holds one entry per flagged answer, duplicates included;
/// use [`unique_recommendation_texts`] when presenting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub score: RiskScore,
    pub label: RiskLabel,
    pub summary: String,
    pub detailed_risks: Vec<Finding>,
    pub recommendations: Vec<Recommendation>,
}

/// A risk profile posted back by the frontend for PDF export.
///
/// The frontend computes its own tiering and may attach display-only text;
/// every display field is optional and falls back to the computed profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub score: f64,
    pub label: String,
    pub summary: String,
    #[serde(default)]
    pub detailed_risks: Vec<Finding>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub tier: String,
    #[serde(default, rename = "riskLevel")]
    pub risk_level: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl ProfileSubmission {
    /// Label for the score heading: the frontend tier if given.
    pub fn display_label(&self) -> &str {
        if self.tier.is_empty() {
            &self.label
        } else {
            &self.tier
        }
    }

    /// Executive summary text: the frontend description if given.
    pub fn display_summary(&self) -> &str {
        if self.description.is_empty() {
            &self.summary
        } else {
            &self.description
        }
    }
}

impl From<RiskProfile> for ProfileSubmission {
    fn from(profile: RiskProfile) -> Self {
        Self {
            score: profile.score.value(),
            label: profile.label.to_string(),
            summary: profile.summary,
            detailed_risks: profile.detailed_risks,
            recommendations: profile.recommendations,
            tier: String::new(),
            risk_level: String::new(),
            tagline: String::new(),
            description: String::new(),
            findings: Vec::new(),
            actions: Vec::new(),
        }
    }
}

/// Recommendation texts with exact duplicates removed, in first-seen order.
pub fn unique_recommendation_texts(recommendations: &[Recommendation]) -> Vec<&str> {
    let mut seen = HashSet::new();
    recommendations
        .iter()
        .map(|r| r.text.as_str())
        .filter(|text| seen.insert(*text))
        .collect()
}
