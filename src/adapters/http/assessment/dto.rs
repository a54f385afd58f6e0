//! Request and response DTOs for assessment endpoints.

use serde::Serialize;

use crate::domain::assessment::{Question, QuestionCatalog};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Response for the question listing: `{count, data}`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListResponse {
    pub count: usize,
    pub data: Vec<Question>,
}

impl From<QuestionCatalog> for QuestionListResponse {
    fn from(catalog: QuestionCatalog) -> Self {
        let data = catalog.questions().to_vec();
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn render_failed(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::RenderFailed.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn question_list_counts_rows() {
        let mut row = Map::new();
        row.insert("Question_ID".to_string(), json!("Q1"));
        row.insert("Extra".to_string(), json!(42));
        let catalog = QuestionCatalog::from_records(vec![row]);

        let json = serde_json::to_value(QuestionListResponse::from(catalog)).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["Question_ID"], "Q1");
        assert_eq!(json["data"][0]["Extra"], 42);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::render_failed("boom")).unwrap();
        assert_eq!(json["code"], "RENDER_FAILED");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn error_response_carries_domain_details() {
        let err = DomainError::new(ErrorCode::UnreadableFile, "Could not read questions")
            .with_detail("filename", "questions.xlsx");
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(json["code"], "UNREADABLE_FILE");
        assert_eq!(json["message"], "Could not read questions");
        assert_eq!(json["details"]["filename"], "questions.xlsx");
    }
}
