//! Conformance endpoint handler.

use axum::{http::StatusCode, response::Response};
use ogc_processes::ConformanceClasses;

use super::json_response;

/// GET /conformance - Conformance classes
pub async fn conformance_handler() -> Response {
    json_response(
        StatusCode::OK,
        &ConformanceClasses::current(),
        Some("max-age=3600"),
    )
}
