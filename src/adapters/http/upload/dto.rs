//! Response DTOs for the upload endpoint.

use serde::Serialize;
use serde_json::{Map, Value};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";

/// Successful upload: decoded rows in file order.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub data: Vec<Map<String, Value>>,
    pub message: String,
}

impl UploadResponse {
    pub fn new(filename: String, data: Vec<Map<String, Value>>) -> Self {
        Self {
            filename,
            data,
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Rejected upload. Sent with HTTP 200 so the frontend can show the message.
#[derive(Debug, Clone, Serialize)]
pub struct UploadErrorResponse {
    pub error: String,
}

impl UploadErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_response_shape() {
        let json = serde_json::to_value(UploadResponse::new("a.csv".to_string(), vec![])).unwrap();
        assert_eq!(
            json,
            json!({"filename": "a.csv", "data": [], "message": "File uploaded successfully"})
        );
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(UploadErrorResponse::new("nope")).unwrap();
        assert_eq!(json, json!({"error": "nope"}));
    }
}
