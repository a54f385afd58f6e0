//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, QuestionListResponse};
pub use handlers::AssessmentAppState;
pub use routes::assessment_router;
