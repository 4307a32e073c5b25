//! Service configuration loading.
//!
//! Settings come from an optional YAML file; `SPECTRA_BASE_URL` and
//! `PROCESSES_PUBLIC_URL` override the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use spectra_common::DEFAULT_BASE_URL;
use storage::DEFAULT_BATCH_SIZE;

/// Environment variable overriding [`ServiceConfig::data_base_url`].
pub const BASE_URL_ENV: &str = "SPECTRA_BASE_URL";

/// Environment variable overriding [`ServiceConfig::public_url`].
pub const PUBLIC_URL_ENV: &str = "PROCESSES_PUBLIC_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Title shown on the landing page.
    pub title: String,

    pub description: String,

    /// Base URL for building links.
    pub public_url: String,

    /// Root of the spectra archive (HTTP(S) URL or local directory).
    pub data_base_url: String,

    /// Rows decoded per record batch.
    pub batch_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            title: "GeoMet-Weather Processes".to_string(),
            description: "OGC API - Processes serving wave spectra from geoparquet archives"
                .to_string(),
            public_url: "http://localhost:5000".to_string(),
            data_base_url: DEFAULT_BASE_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ServiceConfig {
    /// Load from `path` if given, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|name| std::env::var(name).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;
        let config: ServiceConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse: {:?}", path))?;
        tracing::info!("Loaded service config from {:?}", path);
        Ok(config)
    }

    /// Apply overrides from a variable lookup, skipping empty values.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.data_base_url = url;
        }
        if let Some(url) = lookup(PUBLIC_URL_ENV).filter(|v| !v.is_empty()) {
            self.public_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.data_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: Test Processes\ndata_base_url: /data/geoparquet").unwrap();

        let config = ServiceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.title, "Test Processes");
        assert_eq!(config.data_base_url, "/data/geoparquet");
        assert_eq!(config.public_url, "http://localhost:5000");
    }

    #[test]
    fn test_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "batch_size: [not, a, number]").unwrap();
        assert!(ServiceConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = ServiceConfig::default().with_env_overrides(|name| match name {
            BASE_URL_ENV => Some("https://mirror.test/geoparquet".to_string()),
            PUBLIC_URL_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.data_base_url, "https://mirror.test/geoparquet");
        assert_eq!(config.public_url, "http://localhost:5000");
    }
}
