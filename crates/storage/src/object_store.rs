//! Object storage access for geoparquet locations.
//!
//! A location is either an `http(s)://` URL or a filesystem path
//! (`file://` URLs are accepted too). Both are served through
//! `object_store` so that a missing object is reported the same way.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::{
    http::HttpBuilder, local::LocalFileSystem, path::Path, ClientOptions, ObjectStore, RetryConfig,
};
use tracing::{debug, instrument};
use url::Url;

use spectra_common::ReadError;

/// An object store bound to a single object.
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    path: Path,
    location: String,
}

impl std::fmt::Debug for ObjectStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStorage")
            .field("location", &self.location)
            .field("path", &self.path)
            .finish()
    }
}

impl ObjectStorage {
    /// Build a store for the given location.
    pub fn for_location(location: &str) -> Result<Self, ReadError> {
        let (store, path): (Arc<dyn ObjectStore>, Path) = match Url::parse(location) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                let origin = &url[..url::Position::BeforePath];
                let store = HttpBuilder::new()
                    .with_url(origin)
                    .with_client_options(http_client_options(url.scheme() == "http"))
                    .with_retry(single_attempt())
                    .build()
                    .map_err(|e| {
                        ReadError::Other(format!(
                            "Failed to create HTTP client for {}: {}",
                            origin, e
                        ))
                    })?;
                let path = Path::from_url_path(url.path()).map_err(|e| {
                    ReadError::Other(format!("Invalid object path {}: {}", url.path(), e))
                })?;
                (Arc::new(store), path)
            }
            Ok(url) if url.scheme() == "file" => {
                let file = url
                    .to_file_path()
                    .map_err(|_| ReadError::Other(format!("Invalid file URL: {}", location)))?;
                local_store(file)?
            }
            _ => local_store(PathBuf::from(location))?,
        };

        Ok(Self {
            store,
            path,
            location: location.to_string(),
        })
    }

    /// The object path inside the store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole object.
    #[instrument(skip(self), fields(location = %self.location))]
    pub async fn get(&self) -> Result<Bytes, ReadError> {
        let result = self.store.get(&self.path).await.map_err(read_error)?;
        let bytes = result.bytes().await.map_err(read_error)?;

        debug!(size = bytes.len(), "Read object");
        Ok(bytes)
    }

}

/// Plain `http://` is only allowed for `http://` locations. Request and
/// connect timeouts are off: a large file may take as long as it takes.
fn http_client_options(allow_http: bool) -> ClientOptions {
    ClientOptions::new()
        .with_allow_http(allow_http)
        .with_timeout_disabled()
        .with_connect_timeout_disabled()
}

/// Each read is one request; failures surface immediately.
fn single_attempt() -> RetryConfig {
    RetryConfig {
        max_retries: 0,
        ..Default::default()
    }
}

fn local_store(file: PathBuf) -> Result<(Arc<dyn ObjectStore>, Path), ReadError> {
    let absolute = if file.is_absolute() {
        file
    } else {
        std::env::current_dir()
            .map_err(|e| ReadError::Other(format!("Failed to resolve working directory: {}", e)))?
            .join(file)
    };

    let path = Path::from_absolute_path(&absolute).map_err(|e| {
        ReadError::Other(format!("Invalid file path {}: {}", absolute.display(), e))
    })?;

    Ok((Arc::new(LocalFileSystem::new()), path))
}

fn read_error(err: object_store::Error) -> ReadError {
    match err {
        object_store::Error::NotFound { .. } => ReadError::NotFound(err.to_string()),
        other => ReadError::Other(other.to_string()),
    }
}
