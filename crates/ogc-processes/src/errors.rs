//! Process API error types.

use thiserror::Error;

use crate::responses::{ExceptionKind, ExceptionResponse};

/// Failures signalled by a processor or by process lookup.
#[derive(Debug, Error, PartialEq)]
pub enum ProcessorError {
    /// No process registered under the requested id.
    #[error("Process not found: {0}")]
    NoSuchProcess(String),

    /// A request value is unusable.
    #[error("{0}")]
    InvalidParameter(String),

    /// The data the process needs does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The process failed in a way meant for the caller to read.
    #[error("{0}")]
    Execute(String),

    /// Any other failure, message passed through unchanged.
    #[error("{0}")]
    Failed(String),
}

impl ProcessorError {
    /// Exception class reported for this error.
    pub fn kind(&self) -> ExceptionKind {
        match self {
            ProcessorError::NoSuchProcess(_) => ExceptionKind::NoSuchProcess,
            ProcessorError::InvalidParameter(_) => ExceptionKind::InvalidParameter,
            ProcessorError::NotFound(_) => ExceptionKind::NotFound,
            ProcessorError::Execute(_) | ProcessorError::Failed(_) => ExceptionKind::ServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status()
    }

    pub fn to_exception(&self) -> ExceptionResponse {
        ExceptionResponse::new(self.kind(), self.to_string())
    }
}

/// Failures while registering processors.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Process already registered: {0}")]
    DuplicateProcess(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ProcessorError::NoSuchProcess("x".to_string()).status_code(), 404);
        assert_eq!(ProcessorError::InvalidParameter("x".to_string()).status_code(), 400);
        assert_eq!(ProcessorError::NotFound("x".to_string()).status_code(), 404);
        assert_eq!(ProcessorError::Execute("x".to_string()).status_code(), 500);
        assert_eq!(ProcessorError::Failed("x".to_string()).status_code(), 500);
    }

    #[test]
    fn test_message_passes_through() {
        let err = ProcessorError::Execute("Missing required parameters.".to_string());
        assert_eq!(err.to_string(), "Missing required parameters.");

        let exc = err.to_exception();
        assert_eq!(exc.status, 500);
        assert_eq!(exc.detail, "Missing required parameters.");
    }

    #[test]
    fn test_no_such_process_exception() {
        let exc = ProcessorError::NoSuchProcess("wind-data".to_string()).to_exception();
        assert_eq!(exc.status, 404);
        assert!(exc.type_.ends_with("no-such-process"));
        assert!(exc.detail.contains("wind-data"));
    }
}
