//! OGC API - Processes adapter for the spectra retrieval.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{error, info};

use ogc_processes::{ProcessDescription, ProcessOutput, Processor, ProcessorError};
use spectra_common::{SpectraError, TableReader, DEFAULT_BASE_URL};

use crate::metadata::process_description;
use crate::request::{RequestError, SpectraRequest};
use crate::retrieve::retrieve;

/// Media type of the execution result.
pub const OUTPUT_MEDIA_TYPE: &str = "application/json";

/// Hosts [`retrieve`] behind the [`Processor`] contract.
pub struct GetSpectraGeoparquetProcessor {
    metadata: ProcessDescription,
    reader: Arc<dyn TableReader>,
    base_url: String,
}

impl GetSpectraGeoparquetProcessor {
    pub fn new(reader: Arc<dyn TableReader>) -> Self {
        Self {
            metadata: process_description(),
            reader,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read files from another archive root, e.g. a local mirror.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for GetSpectraGeoparquetProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetSpectraGeoparquetProcessor")
            .field("id", &self.metadata.id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Processor for GetSpectraGeoparquetProcessor {
    fn metadata(&self) -> &ProcessDescription {
        &self.metadata
    }

    async fn execute(
        &self,
        data: &Map<String, Value>,
        _outputs: Option<&Value>,
    ) -> Result<ProcessOutput, ProcessorError> {
        let request = SpectraRequest::from_payload(data).map_err(request_error)?;

        let output = retrieve(self.reader.as_ref(), &self.base_url, &request)
            .await
            .map_err(execution_error)?;

        info!(columns = output.len(), "Process execution complete");
        let value =
            serde_json::to_value(output).map_err(|e| ProcessorError::Failed(e.to_string()))?;
        Ok((OUTPUT_MEDIA_TYPE.to_string(), value))
    }
}

fn request_error(err: RequestError) -> ProcessorError {
    match &err {
        RequestError::MissingParameters(missing) => {
            error!(?missing, "Missing required parameters");
            ProcessorError::Execute(err.to_string())
        }
        _ => ProcessorError::InvalidParameter(err.to_string()),
    }
}

fn execution_error(err: SpectraError) -> ProcessorError {
    if err.is_value_error() {
        error!(error = %err, "Process execution error");
        return ProcessorError::Execute(format!("Process execution error: {}", err));
    }
    match err {
        SpectraError::NotFound(_) => ProcessorError::NotFound(err.to_string()),
        other => {
            error!(error = %other, "Spectra retrieval failed");
            ProcessorError::Failed(other.to_string())
        }
    }
}
