//! Geoparquet fixtures shaped like the published spectra files.
//!
//! Files are written under a temporary directory laid out the same way as
//! the remote archive (`{base}/{model_lower}/{file_name}`), so the base
//! directory can stand in for the remote base URL.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryArray, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;

use crate::generators::wkb_point;

/// One row of a spectra file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectraRow {
    pub station_name: &'static str,
    pub member: i64,
    pub frequency: f64,
    pub lon: f64,
    pub lat: f64,
}

impl SpectraRow {
    pub const fn new(
        station_name: &'static str,
        member: i64,
        frequency: f64,
        lon: f64,
        lat: f64,
    ) -> Self {
        Self {
            station_name,
            member,
            frequency,
            lon,
            lat,
        }
    }
}

/// Five rows over two stations and two members; the last row repeats the first.
pub fn sample_rows() -> Vec<SpectraRow> {
    vec![
        SpectraRow::new("00N000E", 0, 0.035, 0.0, 0.0),
        SpectraRow::new("00N000E", 1, 0.035, 0.0, 0.0),
        SpectraRow::new("10N010E", 0, 0.035, 10.0, 10.0),
        SpectraRow::new("10N010E", 1, 0.0385, 10.0, 10.0),
        SpectraRow::new("00N000E", 0, 0.035, 0.0, 0.0),
    ]
}

fn attribute_columns(rows: &[SpectraRow]) -> (Vec<Field>, Vec<ArrayRef>) {
    let fields = vec![
        Field::new("station_name", DataType::Utf8, false),
        Field::new("member", DataType::Int64, false),
        Field::new("frequency", DataType::Float64, false),
    ];
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(
            rows.iter().map(|r| r.station_name),
        )),
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.member))),
        Arc::new(Float64Array::from_iter_values(
            rows.iter().map(|r| r.frequency),
        )),
    ];
    (fields, arrays)
}

/// Rows with a WKB `geometry` column holding each station's position.
pub fn spectra_batch(rows: &[SpectraRow]) -> RecordBatch {
    let (mut fields, mut arrays) = attribute_columns(rows);
    let points: Vec<Vec<u8>> = rows.iter().map(|r| wkb_point(r.lon, r.lat)).collect();
    fields.push(Field::new("geometry", DataType::Binary, false));
    arrays.push(Arc::new(BinaryArray::from_iter_values(points.iter())));

    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .expect("fixture batch should be valid")
}

/// Rows without a geometry column.
pub fn attribute_batch(rows: &[SpectraRow]) -> RecordBatch {
    let (fields, arrays) = attribute_columns(rows);
    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .expect("fixture batch should be valid")
}

/// Write a batch as a parquet file.
pub fn write_parquet(path: &Path, batch: &RecordBatch) {
    let file = File::create(path).expect("failed to create fixture file");
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).expect("failed to create parquet writer");
    writer.write(batch).expect("failed to write fixture batch");
    writer.close().expect("failed to close parquet writer");
}

/// A temporary directory laid out like the remote spectra archive.
pub struct SpectraArchive {
    dir: TempDir,
}

impl SpectraArchive {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Base location to resolve paths against.
    pub fn base(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a parquet file at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, batch: &RecordBatch) -> PathBuf {
        let path = self.prepare(relative);
        write_parquet(&path, batch);
        path
    }

    /// Write raw bytes at `relative`, creating parent directories.
    pub fn write_bytes(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.prepare(relative);
        std::fs::write(&path, bytes).expect("failed to write fixture bytes");
        path
    }

    fn prepare(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create fixture directory");
        }
        path
    }
}

impl Default for SpectraArchive {
    fn default() -> Self {
        Self::new()
    }
}
