//! Error types for spectra retrieval.

use thiserror::Error;

use crate::table::TableError;

/// Result type alias using SpectraError.
pub type SpectraResult<T> = Result<T, SpectraError>;

/// Failures of the retrieval-and-transform operation.
#[derive(Debug, Error)]
pub enum SpectraError {
    // === Request Errors ===
    #[error("Invalid model {0}")]
    InvalidModel(String),

    #[error("Model {0} requires a region")]
    MissingRegion(String),

    // === Load Errors ===
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("An unexpected error occurred: {0}")]
    Load(String),

    // === Transform Errors ===
    #[error("Invalid geometry: {0}")]
    Geometry(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl SpectraError {
    /// Whether the error comes from a bad parameter value rather than from
    /// loading or transforming data.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            SpectraError::InvalidModel(_) | SpectraError::MissingRegion(_)
        )
    }
}

/// Failures reported by a [`TableReader`](crate::reader::TableReader).
#[derive(Debug, Error)]
pub enum ReadError {
    /// The location does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The location exists but holds no usable data.
    #[error("{0}")]
    Empty(String),

    /// Anything else: network, permissions, malformed file, bad projection.
    #[error("{0}")]
    Other(String),
}

impl From<ReadError> for SpectraError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::NotFound(msg) => SpectraError::NotFound(msg),
            ReadError::Empty(msg) => SpectraError::EmptyData(msg),
            ReadError::Other(msg) => SpectraError::Load(msg),
        }
    }
}
