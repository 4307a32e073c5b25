//! In-memory columnar table built from a geoparquet file.
//!
//! The schema is only known once the file has been read, so columns are
//! looked up by name at runtime. Row positions are always the contiguous
//! range `0..num_rows`; removing rows renumbers the survivors.

use std::collections::{BTreeMap, HashSet};
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column name -> (row position -> value), in column order.
pub type OutputMapping = IndexMap<String, BTreeMap<usize, CellValue>>;

/// A decoded point geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

/// A single table cell.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Binary(Vec<u8>),
    List(Vec<CellValue>),
    Point(PointRecord),
}

/// Normalises floats so that equal values hash equally: `0.0 == -0.0`,
/// and every NaN matches every other NaN as in row deduplication.
fn float_key(f: f64) -> u64 {
    if f == 0.0 {
        0
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        use CellValue::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (Float(a), Float(b)) => float_key(*a) == float_key(*b),
            (Str(a), Str(b)) => a == b,
            (Binary(a), Binary(b)) => a == b,
            (List(a), List(b)) => a == b,
            (Point(a), Point(b)) => {
                float_key(a.x) == float_key(b.x) && float_key(a.y) == float_key(b.y)
            }
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Null => {}
            CellValue::Bool(v) => v.hash(state),
            CellValue::Int(v) => v.hash(state),
            CellValue::UInt(v) => v.hash(state),
            CellValue::Float(v) => float_key(*v).hash(state),
            CellValue::Str(v) => v.hash(state),
            CellValue::Binary(v) => v.hash(state),
            CellValue::List(v) => v.hash(state),
            CellValue::Point(p) => {
                float_key(p.x).hash(state);
                float_key(p.y).hash(state);
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<PointRecord> for CellValue {
    fn from(p: PointRecord) -> Self {
        CellValue::Point(p)
    }
}

/// Structural errors when assembling a table.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Ordered named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    num_rows: usize,
}

impl Table {
    /// An empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, checking that names are unique and lengths agree.
    pub fn try_from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let mut table = Table::new();
        for column in columns {
            table.push_column(column.name, column.values)?;
        }
        Ok(table)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Remove a column and return its values. The row count is unchanged.
    pub fn take_column(&mut self, name: &str) -> Option<Vec<CellValue>> {
        let index = self.columns.iter().position(|c| c.name == name)?;
        Some(self.columns.remove(index).values)
    }

    /// Append a column after the existing ones.
    ///
    /// The first column of a table without rows or columns sets the row count.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<CellValue>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        if self.columns.is_empty() && self.num_rows == 0 {
            self.num_rows = values.len();
        } else if values.len() != self.num_rows {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.num_rows,
                actual: values.len(),
            });
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Keep the first occurrence of every distinct full row and renumber
    /// the survivors from zero. Returns the number of rows removed.
    pub fn drop_duplicates(&mut self) -> usize {
        let keep: Vec<bool> = {
            let mut seen: HashSet<Vec<&CellValue>> = HashSet::with_capacity(self.num_rows);
            (0..self.num_rows)
                .map(|row| seen.insert(self.columns.iter().map(|c| &c.values[row]).collect()))
                .collect()
        };

        let kept = keep.iter().filter(|k| **k).count();
        let removed = self.num_rows - kept;
        if removed > 0 {
            for column in &mut self.columns {
                let mut flags = keep.iter();
                column.values.retain(|_| *flags.next().unwrap_or(&false));
            }
            self.num_rows = kept;
        }
        removed
    }

    /// Transpose into the column-major output mapping.
    pub fn into_output(self) -> OutputMapping {
        self.columns
            .into_iter()
            .map(|c| (c.name, c.values.into_iter().enumerate().collect()))
            .collect()
    }
}
