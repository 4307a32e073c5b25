//! Application state for the Processes API.

use std::sync::Arc;

use anyhow::Result;

use ogc_processes::ProcessRegistry;
use spectra_processor::GetSpectraGeoparquetProcessor;
use storage::GeoparquetReader;

use crate::config::ServiceConfig;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// Hosted processes.
    pub registry: ProcessRegistry,

    pub config: ServiceConfig,
}

impl AppState {
    /// Register every hosted process.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let reader = GeoparquetReader::new().with_batch_size(config.batch_size);
        let spectra = GetSpectraGeoparquetProcessor::new(Arc::new(reader))
            .with_base_url(config.data_base_url.clone());

        let mut registry = ProcessRegistry::new();
        registry.register(Arc::new(spectra))?;

        tracing::info!(
            processes = registry.len(),
            data_base_url = %config.data_base_url,
            "Registered processes"
        );
        Ok(Self { registry, config })
    }

    /// Base URL for building links.
    pub fn base_url(&self) -> &str {
        &self.config.public_url
    }
}
