//! Spectra geoparquet retrieval.
//!
//! Locates the wave-spectra geoparquet file of a forecast run, loads it
//! with column projection and row filters pushed down, optionally drops
//! duplicate rows, decodes the WKB `geometry` column into `{x, y}` points
//! and returns a column-major mapping. [`GetSpectraGeoparquetProcessor`]
//! exposes the operation as an OGC API - Processes process.

pub mod geometry;
pub mod metadata;
pub mod processor;
pub mod request;
pub mod retrieve;

pub use metadata::{process_description, OUTPUT_NAME, PROCESS_ID};
pub use processor::{GetSpectraGeoparquetProcessor, OUTPUT_MEDIA_TYPE};
pub use request::{RequestError, SpectraRequest};
pub use retrieve::{retrieve, GEOMETRY_COLUMN, POINT_COLUMN};
