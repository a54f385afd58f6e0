//! Integration tests for the assessment HTTP API.
//!
//! These tests run the full router against real adapters:
//! 1. Questions load from a CSV file on disk
//! 2. Scoring and report endpoints round-trip JSON
//! 3. PDF downloads are produced by the printpdf renderer
//! 4. Uploads and frontend assets are served from a temp directory

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use ai_risk_assessment::adapters::http::{app_router, AppServices, HttpSettings};
use ai_risk_assessment::adapters::{FileQuestionSource, PdfExportService, SpreadsheetParser};
use ai_risk_assessment::ports::TabularParser;

// =============================================================================
// Test Infrastructure
// =============================================================================

const QUESTIONS_CSV: &str = "\
Question_ID ,Domain,Question_Text,Risk_Description,Recommendation,Weight,Owner
AI-001,Governance,Is there a written AI policy?,Shadow AI usage,Adopt a written AI policy.,3,Legal
AI-002,Privacy,Is personal data minimised before training?,Data leakage,Minimise training data.,2,DPO
AI-003,Security,Are model endpoints access controlled?,Model theft,Adopt a written AI policy.,1,CISO
";

fn write_questions(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("questions.csv");
    std::fs::write(&path, QUESTIONS_CSV).unwrap();
    path
}

fn app(dir: &TempDir) -> Router {
    let parser: Arc<dyn TabularParser> = Arc::new(SpreadsheetParser::new());
    let services = AppServices {
        questions: Arc::new(FileQuestionSource::new(
            write_questions(dir.path()),
            parser.clone(),
        )),
        parser,
        exporter: Arc::new(PdfExportService::new()),
        static_dir: dir.path().to_path_buf(),
    };
    app_router(services, &HttpSettings::default())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// =============================================================================
// Questions
// =============================================================================

#[tokio::test]
async fn questions_are_listed_with_extra_columns() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir)
        .oneshot(Request::builder().uri("/api/questions").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 3);
    assert_eq!(json["data"][0]["Question_ID"], "AI-001");
    assert_eq!(json["data"][0]["Weight"], 3);
    assert_eq!(json["data"][2]["Owner"], "CISO");
}

#[tokio::test]
async fn missing_question_file_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let parser: Arc<dyn TabularParser> = Arc::new(SpreadsheetParser::new());
    let app = app_router(
        AppServices {
            questions: Arc::new(FileQuestionSource::new(
                dir.path().join("missing.xlsx"),
                parser.clone(),
            )),
            parser,
            exporter: Arc::new(PdfExportService::new()),
            static_dir: dir.path().to_path_buf(),
        },
        &HttpSettings::default(),
    );

    let response = app
        .oneshot(Request::builder().uri("/api/load-questions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json, json!({"count": 0, "data": []}));
}

// =============================================================================
// Scoring
// =============================================================================

#[tokio::test]
async fn calculate_scores_against_question_file() {
    let dir = TempDir::new().unwrap();
    let body = json!([
        {"question_id": "AI-001", "weight": 3, "answer": "Yes"},
        {"question_id": "AI-002", "weight": 2, "answer": "Partial"},
        {"question_id": "AI-003", "weight": 1, "answer": "No"}
    ]);

    let response = app(&dir).oneshot(post_json("/api/calculate", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // (3 + 1 + 0) / 6 = 66.67%
    assert_eq!(json["score"], 66.67);
    assert_eq!(json["label"], "Medium Risk");
    assert_eq!(json["detailed_risks"].as_array().unwrap().len(), 2);
    assert_eq!(json["detailed_risks"][0]["domain"], "Privacy");
    assert_eq!(json["detailed_risks"][0]["impact"], "Data leakage");
    assert_eq!(json["detailed_risks"][1]["user_response"], "No");
    assert_eq!(json["recommendations"][1]["text"], "Adopt a written AI policy.");
}

#[tokio::test]
async fn unknown_question_gets_placeholders() {
    let dir = TempDir::new().unwrap();
    let body = json!([{"question_id": "AI-999", "weight": 1, "answer": "No"}]);

    let json = body_json(
        app(&dir)
            .oneshot(post_json("/api/generate-report", body))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(json["score"], 0.0);
    assert_eq!(json["label"], "Low Risk");
    assert_eq!(json["detailed_risks"][0]["domain"], "Unknown");
    assert_eq!(json["detailed_risks"][0]["finding"], "Unknown Question");
    assert_eq!(json["detailed_risks"][0]["impact"], "Risk not specified in database");
    assert_eq!(json["recommendations"][0]["text"], "Implement oversight controls.");
}

#[tokio::test]
async fn many_flagged_answers_add_caveat() {
    let dir = TempDir::new().unwrap();
    let answers: Vec<Value> = (0..16)
        .map(|i| json!({"question_id": format!("Q{}", i), "weight": 1, "answer": "No"}))
        .collect();

    let json = body_json(
        app(&dir)
            .oneshot(post_json("/api/calculate", Value::Array(answers)))
            .await
            .unwrap(),
    )
    .await;

    assert!(json["summary"]
        .as_str()
        .unwrap()
        .ends_with(" (High number of individual risk findings)."));
}

// =============================================================================
// PDF reports
// =============================================================================

#[tokio::test]
async fn download_report_returns_real_pdf() {
    let dir = TempDir::new().unwrap();
    let body = json!([
        {"question_id": "AI-001", "weight": 3, "answer": "No"},
        {"question_id": "AI-003", "weight": 1, "answer": "No"}
    ]);

    let response = app(&dir)
        .oneshot(post_json("/api/download-report", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=AI_Risk_Report.pdf"
    );
    assert!(body_bytes(response).await.starts_with(b"%PDF"));
}

#[tokio::test]
async fn profile_pdf_accepts_display_fields() {
    let dir = TempDir::new().unwrap();
    let body = json!({
        "score": 42.5,
        "label": "Medium Risk",
        "summary": "Gaps exist.",
        "detailed_risks": [
            {"question_id": "AI-001", "domain": "R&D <Labs>", "finding": "No policy", "impact": "x", "user_response": "No"}
        ],
        "recommendations": [{"domain": "Governance", "text": "Adopt a policy."}],
        "tier": "Developing",
        "riskLevel": "medium",
        "tagline": "Getting there",
        "description": "Controls are forming.",
        "findings": ["No model inventory"],
        "actions": ["Build an inventory"]
    });

    let response = app(&dir)
        .oneshot(post_json("/api/generate-pdf-from-profile", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=Bizcom_AI_Risk_Report.pdf"
    );
    assert!(body_bytes(response).await.starts_with(b"%PDF"));
}

// =============================================================================
// Uploads and frontend
// =============================================================================

fn multipart(filename: &str, content: &[u8]) -> Request<Body> {
    let boundary = "integration-boundary";
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n",
        b = boundary,
        f = filename
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_csv_and_reject_text() {
    let dir = TempDir::new().unwrap();

    let json = body_json(
        app(&dir)
            .oneshot(multipart("answers.csv", b"question_id,answer\nAI-001,Yes\n"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(json["filename"], "answers.csv");
    assert_eq!(json["data"], json!([{"question_id": "AI-001", "answer": "Yes"}]));

    let json = body_json(
        app(&dir)
            .oneshot(multipart("answers.txt", b"AI-001 Yes"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(json, json!({"error": "Only Excel or CSV files are allowed."}));
}

#[tokio::test]
async fn index_inlines_frontend_script() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<div id='root'></div><script type='text/babel' src='/Script.js'></script>",
    )
    .unwrap();
    std::fs::write(dir.path().join("Script.js"), "ReactDOM.render(<App />);").unwrap();

    let response = app(&dir)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(
        html,
        "<div id='root'></div><script type=\"text/babel\">\nReactDOM.render(<App />);\n</script>"
    );
}
