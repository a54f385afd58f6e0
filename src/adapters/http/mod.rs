//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; `app` merges
//! them under one middleware stack.

pub mod app;
pub mod assessment;
pub mod frontend;
pub mod upload;

// Re-export key types for convenience
pub use app::{app_router, AppServices, HttpSettings};
pub use assessment::{assessment_router, AssessmentAppState};
pub use frontend::{frontend_router, FrontendAppState};
pub use upload::{upload_router, UploadAppState};
