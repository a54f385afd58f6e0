//! HTTP adapter for file uploads.

mod dto;
mod handlers;
mod routes;

pub use dto::{UploadErrorResponse, UploadResponse, UPLOAD_SUCCESS_MESSAGE};
pub use handlers::{UploadAppState, FILE_FIELD};
pub use routes::upload_router;
