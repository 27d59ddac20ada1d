//! Status HTTP Adapter
//!
//! Serves `GET /status` via axum 0.7. The router carries no other
//! routes; unknown paths fall through to axum's 404.
//!
//! Sub-modules:
//! - `error`: HTTP error type and its response mapping
//! - `status`: router, handler and listener loop

pub mod error;
pub mod status;

pub use error::ApiError;
pub use status::{status_router, StatusServer, STATUS_PATH};
