//! Storage access for spectra geoparquet files.
//!
//! Provides:
//! - Object storage access (HTTP(S) and local filesystem) for a single location
//! - A [`TableReader`](spectra_common::TableReader) that decodes geoparquet
//!   with column projection and row filters applied while reading

mod convert;
pub mod geoparquet;
pub mod object_store;
pub mod predicate;

pub use self::object_store::ObjectStorage;
pub use geoparquet::{decode_table, GeoparquetReader, DEFAULT_BATCH_SIZE};
