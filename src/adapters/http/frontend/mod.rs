//! HTTP adapter serving the bundled frontend (`index.html` and `Script.js`).

mod handlers;
mod routes;

pub use handlers::{inline_script, FrontendAppState, INDEX_FILE, SCRIPT_FILE};
pub use routes::frontend_router;
