//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a questionnaire item (the `Question_ID` column).
///
/// Surrounding whitespace is stripped on construction so that ids typed into
/// a spreadsheet by hand still match the ids posted by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new QuestionId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_accepts_valid_string() {
        let id = QuestionId::new("AI-001").unwrap();
        assert_eq!(id.as_str(), "AI-001");
    }

    #[test]
    fn question_id_trims_whitespace() {
        let id = QuestionId::new("  AI-002 ").unwrap();
        assert_eq!(id.as_str(), "AI-002");
    }

    #[test]
    fn question_id_rejects_blank_string() {
        let result = QuestionId::new("   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "question_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn question_id_parses_from_str() {
        let id: QuestionId = "GOV-7".parse().unwrap();
        assert_eq!(format!("{}", id), "GOV-7");
    }

    #[test]
    fn question_id_serializes_transparently() {
        let id = QuestionId::new("AI-003").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"AI-003\"");
    }
}
