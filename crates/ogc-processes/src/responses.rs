//! Process API response types.
//!
//! This module contains types for the landing page, conformance,
//! and exception responses.

use serde::{Deserialize, Serialize};

use crate::conformance;
use crate::types::Link;

/// Landing page response for the API root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandingPage {
    /// Title of the API.
    pub title: String,

    /// Description of the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Links to related resources.
    pub links: Vec<Link>,
}

impl LandingPage {
    /// Create a new landing page with standard links.
    pub fn new(title: impl Into<String>, description: impl Into<String>, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let links = vec![
            Link::new(base_url, "self")
                .with_type("application/json")
                .with_title("This document"),
            Link::new(format!("{}/conformance", base_url), "conformance")
                .with_type("application/json")
                .with_title("Conformance classes"),
            Link::new(
                format!("{}/processes", base_url),
                "http://www.opengis.net/def/rel/ogc/1.0/processes",
            )
            .with_type("application/json")
            .with_title("Processes"),
        ];

        Self {
            title: title.into(),
            description: Some(description.into()),
            links,
        }
    }
}

/// Conformance declaration response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConformanceClasses {
    /// List of conformance class URIs.
    #[serde(rename = "conformsTo")]
    pub conforms_to: Vec<String>,
}

impl ConformanceClasses {
    /// Conformance classes of the current implementation.
    pub fn current() -> Self {
        Self {
            conforms_to: vec![
                conformance::CORE.to_string(),
                conformance::OGC_PROCESS_DESCRIPTION.to_string(),
                conformance::JSON.to_string(),
            ],
        }
    }

    /// Check if a conformance class is declared.
    pub fn contains(&self, class: &str) -> bool {
        self.conforms_to.iter().any(|c| c == class)
    }
}

/// Exception classes a Processes server reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    NoSuchProcess,
    NotFound,
    InvalidParameter,
    ServerError,
}

impl ExceptionKind {
    const URI_PREFIX: &'static str = "http://www.opengis.net/def/exceptions/ogcapi-processes-1/1.0";

    pub fn status(self) -> u16 {
        match self {
            ExceptionKind::NoSuchProcess | ExceptionKind::NotFound => 404,
            ExceptionKind::InvalidParameter => 400,
            ExceptionKind::ServerError => 500,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ExceptionKind::NoSuchProcess => "no-such-process",
            ExceptionKind::NotFound => "not-found",
            ExceptionKind::InvalidParameter => "invalid-parameter-value",
            ExceptionKind::ServerError => "server-error",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ExceptionKind::NoSuchProcess => "No such process",
            ExceptionKind::NotFound => "Not found",
            ExceptionKind::InvalidParameter => "Invalid parameter value",
            ExceptionKind::ServerError => "Process execution failed",
        }
    }

    /// Exception type URI, e.g. `.../no-such-process`.
    pub fn type_uri(self) -> String {
        format!("{}/{}", Self::URI_PREFIX, self.slug())
    }
}

/// Exception document (RFC 7807 problem details) returned with error statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExceptionResponse {
    #[serde(rename = "type")]
    pub type_: String,

    pub title: String,

    pub status: u16,

    pub detail: String,

    /// Request path that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ExceptionResponse {
    pub fn new(kind: ExceptionKind, detail: impl Into<String>) -> Self {
        Self {
            type_: kind.type_uri(),
            title: kind.title().to_string(),
            status: kind.status(),
            detail: detail.into(),
            instance: None,
        }
    }

    /// Attach the path of the failing request.
    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.instance = Some(path.into());
        self
    }
}
