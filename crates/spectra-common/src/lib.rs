//! Common types shared by the spectra geoparquet crates.

pub mod error;
pub mod filter;
pub mod model;
pub mod reader;
pub mod table;

pub use error::{ReadError, SpectraError, SpectraResult};
pub use filter::{FilterClause, FilterOp, FilterValue};
pub use model::{resolve_path, Model, ModelFamily, DEFAULT_BASE_URL};
pub use reader::TableReader;
pub use table::{CellValue, Column, OutputMapping, PointRecord, Table, TableError};
