//! Upload application handlers.

mod parse_upload;

pub use parse_upload::{
    ParseUploadCommand, ParseUploadHandler, ParseUploadResult, UNSUPPORTED_UPLOAD_MESSAGE,
};
