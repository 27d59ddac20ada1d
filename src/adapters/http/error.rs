//! HTTP error mapping for the status endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::usecases::status_report::ReportError;

/// Errors surfaced to HTTP clients.
///
/// Every variant maps to a generic server error; the body is
/// informational only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("status report failed: {0}")]
    Report(#[from] ReportError),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            Self::Report(ReportError::Serialization(_)) => "SERIALIZATION_ERROR",
            Self::Report(ReportError::OutOfRange { .. }) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": "Internal server error",
            }
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
