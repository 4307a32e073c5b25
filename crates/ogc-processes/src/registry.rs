//! Processor plugin contract and registry.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::errors::{ProcessorError, RegistryError};
use crate::process::ProcessDescription;

/// Media type and body returned by a successful execution.
pub type ProcessOutput = (String, Value);

/// A process that can be registered with a host.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Descriptor the process is registered under.
    fn metadata(&self) -> &ProcessDescription;

    /// Run the process on `data`. `outputs` is the caller's output
    /// selection, passed through as a hint.
    async fn execute(
        &self,
        data: &Map<String, Value>,
        outputs: Option<&Value>,
    ) -> Result<ProcessOutput, ProcessorError>;
}

/// Processors keyed by the id in their descriptor, in registration order.
#[derive(Default, Clone)]
pub struct ProcessRegistry {
    processes: IndexMap<String, Arc<dyn Processor>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, processor: Arc<dyn Processor>) -> Result<(), RegistryError> {
        let id = processor.metadata().id.clone();
        if self.processes.contains_key(&id) {
            return Err(RegistryError::DuplicateProcess(id));
        }
        self.processes.insert(id, processor);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Arc<dyn Processor>, ProcessorError> {
        self.processes
            .get(id)
            .cloned()
            .ok_or_else(|| ProcessorError::NoSuchProcess(id.to_string()))
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &ProcessDescription> {
        self.processes.values().map(|p| p.metadata())
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl std::fmt::Debug for ProcessRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessRegistry")
            .field("processes", &self.processes.keys().collect::<Vec<_>>())
            .finish()
    }
}
