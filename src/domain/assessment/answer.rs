//! User answers to questionnaire items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The answer a user gave to a single question.
///
/// The questionnaire offers exactly three choices. Anything else the client
/// sends is kept verbatim as `Unrecognized`: it scores zero like `No` but is
/// not reported as a finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnswerValue {
    Yes,
    Partial,
    No,
    Unrecognized(String),
}

impl AnswerValue {
    /// Contribution of this answer before weighting (0.0 to 1.0).
    pub fn unit_score(&self) -> f64 {
        match self {
            AnswerValue::Yes => 1.0,
            AnswerValue::Partial => 0.5,
            AnswerValue::No | AnswerValue::Unrecognized(_) => 0.0,
        }
    }

    /// A flagged answer marks a governance gap and produces a finding.
    pub fn is_flagged(&self) -> bool {
        matches!(self, AnswerValue::Partial | AnswerValue::No)
    }

    pub fn as_str(&self) -> &str {
        match self {
            AnswerValue::Yes => "Yes",
            AnswerValue::Partial => "Partial",
            AnswerValue::No => "No",
            AnswerValue::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for AnswerValue {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Yes" => AnswerValue::Yes,
            "Partial" => AnswerValue::Partial,
            "No" => AnswerValue::No,
            _ => AnswerValue::Unrecognized(raw),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(raw: &str) -> Self {
        AnswerValue::from(raw.to_string())
    }
}

impl From<AnswerValue> for String {
    fn from(value: AnswerValue) -> Self {
        match value {
            AnswerValue::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submitted answer: `{question_id, weight, answer}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub question_id: String,
    pub weight: f64,
    pub answer: AnswerValue,
}

impl UserResponse {
    pub fn new(question_id: impl Into<String>, weight: f64, answer: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            weight,
            answer: answer.into(),
        }
    }
}
