//! OGC API - Processes
//!
//! Types and the plugin contract for hosting processes behind an
//! OGC API - Processes server: process descriptors, the [`Processor`]
//! trait, a registry keyed by process id, and the error signal processors
//! use for caller-facing failures.
//!
//! # Example
//!
//! ```rust
//! use ogc_processes::{InputDescription, ProcessDescription};
//! use serde_json::json;
//!
//! let description = ProcessDescription::new("echo", "0.1.0", "Echo")
//!     .with_input("message", InputDescription::required("message", json!({"type": "string"})));
//! assert_eq!(description.required_inputs(), vec!["message"]);
//! ```

pub mod errors;
pub mod execute;
pub mod process;
pub mod registry;
pub mod responses;
pub mod types;

pub use errors::{ProcessorError, RegistryError};
pub use execute::ExecuteRequest;
pub use process::{
    InputDescription, JobControl, OutputDescription, ProcessDescription, ProcessList,
    ProcessSummary, Transmission,
};
pub use registry::{ProcessOutput, ProcessRegistry, Processor};
pub use responses::{ConformanceClasses, ExceptionKind, ExceptionResponse, LandingPage};
pub use types::Link;

/// OGC API - Processes conformance class URIs
pub mod conformance {
    /// Core conformance class
    pub const CORE: &str = "http://www.opengis.net/spec/ogcapi-processes-1/1.0/conf/core";
    /// OGC process description conformance class
    pub const OGC_PROCESS_DESCRIPTION: &str =
        "http://www.opengis.net/spec/ogcapi-processes-1/1.0/conf/ogc-process-description";
    /// JSON encoding conformance class
    pub const JSON: &str = "http://www.opengis.net/spec/ogcapi-processes-1/1.0/conf/json";
}

