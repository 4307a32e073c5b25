//! Process list and process description handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri, Path},
    http::StatusCode,
    response::Response,
};
use ogc_processes::{Link, ProcessList};

use super::{json_response, processor_error_response};
use crate::state::AppState;

/// GET /processes - Summaries of every hosted process
pub async fn list_processes_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let base_url = state.base_url().trim_end_matches('/');
    let list = ProcessList {
        processes: state
            .registry
            .descriptions()
            .map(|d| d.summary(base_url))
            .collect(),
        links: vec![Link::new(format!("{}/processes", base_url), "self")
            .with_type("application/json")
            .with_title("Process list")],
    };
    json_response(StatusCode::OK, &list, Some("max-age=300"))
}

/// GET /processes/:process_id - Full process description
pub async fn get_process_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(process_id): Path<String>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    match state.registry.get(&process_id) {
        Ok(process) => {
            let mut description = process.metadata().clone();
            let href = format!(
                "{}/processes/{}/execution",
                state.base_url().trim_end_matches('/'),
                process_id
            );
            description.links.push(
                Link::new(href, "http://www.opengis.net/def/rel/ogc/1.0/execute")
                    .with_type("application/json")
                    .with_title("Execute endpoint"),
            );
            json_response(StatusCode::OK, &description, Some("max-age=300"))
        }
        Err(err) => processor_error_response(&err, uri.path()),
    }
}
