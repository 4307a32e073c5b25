//! Process execution handler.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, OriginalUri, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use ogc_processes::{ExceptionKind, ExceptionResponse, ExecuteRequest};
use tracing::{info, instrument, warn};

use super::{exception_response, processor_error_response};
use crate::state::AppState;

/// POST /processes/:process_id/execution - Synchronous execution
///
/// Returns the processor's output with its media type, or an exception
/// document with the mapped status code.
#[instrument(skip(state, uri, body))]
pub async fn execute_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(process_id): Path<String>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<ExecuteRequest>, JsonRejection>,
) -> Response {
    let path = uri.path();
    let process = match state.registry.get(&process_id) {
        Ok(process) => process,
        Err(err) => return processor_error_response(&err, path),
    };

    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected execution body");
            let exception =
                ExceptionResponse::new(ExceptionKind::InvalidParameter, rejection.body_text())
                    .at(path);
            return exception_response(&exception);
        }
    };

    match process
        .execute(&request.inputs, request.outputs.as_ref())
        .await
    {
        Ok((media_type, value)) => {
            info!(%media_type, "Execution succeeded");
            let body = serde_json::to_string(&value).unwrap_or_default();
            (StatusCode::OK, [(header::CONTENT_TYPE, media_type)], body).into_response()
        }
        Err(err) => {
            warn!(status = err.status_code(), error = %err, "Execution failed");
            processor_error_response(&err, path)
        }
    }
}
