//! HTTP request handlers for the Processes API.

pub mod conformance;
pub mod execution;
pub mod health;
pub mod landing;
pub mod processes;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use ogc_processes::{ExceptionResponse, ProcessorError};
use serde::Serialize;

/// Serialize `body` as a JSON response.
pub(crate) fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    cache_control: Option<&'static str>,
) -> Response {
    let json = serde_json::to_string_pretty(body).unwrap_or_default();
    match cache_control {
        Some(cache) => (
            status,
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CACHE_CONTROL, cache),
            ],
            json,
        )
            .into_response(),
        None => (status, [(header::CONTENT_TYPE, "application/json")], json).into_response(),
    }
}

/// Render an OGC exception document with its status code.
pub(crate) fn exception_response(exception: &ExceptionResponse) -> Response {
    let status =
        StatusCode::from_u16(exception.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, exception, None)
}

/// Exception document for `err`, tagged with the failing request path.
pub(crate) fn processor_error_response(err: &ProcessorError, path: &str) -> Response {
    exception_response(&err.to_exception().at(path))
}
