//! Mapping of greenhouse failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use greenhouse_core::GreenhouseError;
use log::{error, warn};
use serde::Serialize;

/// Uniform JSON body for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

/// An HTTP status to answer a failed request with.
///
/// The cause is logged when the error is built and never sent to the
/// client; the response only carries the status and its reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    /// Answer with `status` whatever the cause was.
    pub fn with_cause(status: StatusCode, operation: &str, cause: &GreenhouseError) -> Self {
        if status.is_server_error() {
            error!("{operation} failed: {cause}");
        } else {
            warn!("{operation} rejected: {cause}");
        }
        Self::new(status)
    }

    /// Missing plants become 404, anything else the endpoint's `fallback`.
    pub fn classify(operation: &str, cause: &GreenhouseError, fallback: StatusCode) -> Self {
        let status = if cause.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            fallback
        };
        Self::with_cause(status, operation, cause)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: status.canonical_reason().unwrap_or("error"),
        };
        (status, Json(body)).into_response()
    }
}
