//! Landing page handler.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Response};
use ogc_processes::LandingPage;

use super::json_response;
use crate::state::AppState;

/// GET / - Landing page
pub async fn landing_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let landing = LandingPage::new(
        &state.config.title,
        &state.config.description,
        state.base_url(),
    );
    json_response(StatusCode::OK, &landing, Some("max-age=300"))
}

#[cfg(test)]
mod tests {
    use ogc_processes::LandingPage;

    #[test]
    fn test_landing_page_structure() {
        let landing = LandingPage::new("Test API", "Test description", "http://localhost:5000/");

        assert!(landing.links.iter().any(|l| l.rel == "self"));
        assert!(landing.links.iter().any(|l| l.rel == "conformance"));
        assert!(landing
            .links
            .iter()
            .any(|l| l.href == "http://localhost:5000/processes"));
    }
}
