//! Geoparquet table reader with projection and predicate pushdown.

use async_trait::async_trait;
use bytes::Bytes;
use parquet::arrow::arrow_reader::{
    ArrowPredicate, ArrowPredicateFn, ParquetRecordBatchReaderBuilder, RowFilter,
};
use parquet::arrow::ProjectionMask;
use parquet::schema::types::SchemaDescriptor;
use arrow::array::RecordBatch;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatchReader;
use tracing::{debug, info, instrument};

use spectra_common::{FilterClause, ReadError, Table, TableReader};

use crate::convert::batches_to_table;
use crate::object_store::ObjectStorage;
use crate::predicate;

/// Default number of rows decoded per record batch.
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Reads geoparquet files from HTTP(S) or the local filesystem.
#[derive(Debug, Clone)]
pub struct GeoparquetReader {
    batch_size: usize,
}

impl Default for GeoparquetReader {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl GeoparquetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

#[async_trait]
impl TableReader for GeoparquetReader {
    #[instrument(skip(self, columns, filters))]
    async fn read_table(
        &self,
        location: &str,
        columns: Option<&[String]>,
        filters: Option<&[FilterClause]>,
    ) -> Result<Table, ReadError> {
        let storage = ObjectStorage::for_location(location)?;
        let bytes = storage.get().await?;
        let table = decode_table(bytes, columns, filters, self.batch_size)?;

        info!(
            rows = table.num_rows(),
            columns = table.num_columns(),
            "Loaded geoparquet table"
        );
        Ok(table)
    }
}

/// Decode an in-memory parquet file.
///
/// A zero-byte resource or a file without columns is reported as
/// [`ReadError::Empty`]. Unknown projected or filtered columns, malformed
/// filters and decoding failures are [`ReadError::Other`].
pub fn decode_table(
    bytes: Bytes,
    columns: Option<&[String]>,
    filters: Option<&[FilterClause]>,
    batch_size: usize,
) -> Result<Table, ReadError> {
    if bytes.is_empty() {
        return Err(ReadError::Empty("resource has no content".to_string()));
    }

    let builder = ParquetRecordBatchReaderBuilder::try_new(bytes).map_err(other)?;
    let schema = builder.schema().clone();
    ensure_columns(&schema)?;

    let order: Vec<String> = match columns {
        Some(names) => names.to_vec(),
        None => schema.fields().iter().map(|f| f.name().clone()).collect(),
    };
    let indices = order
        .iter()
        .map(|name| {
            schema
                .index_of(name)
                .map_err(|_| ReadError::Other(format!("No match for column: {}", name)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let projection = ProjectionMask::roots(builder.parquet_schema(), indices);
    let row_filter = match filters {
        Some(clauses) if !clauses.is_empty() => Some(build_row_filter(
            clauses,
            &schema,
            builder.parquet_schema(),
        )?),
        _ => None,
    };

    let mut builder = builder.with_projection(projection).with_batch_size(batch_size);
    if let Some(row_filter) = row_filter {
        builder = builder.with_row_filter(row_filter);
    }

    let reader = builder.build().map_err(other)?;
    let projected = reader.schema();
    let batches = reader
        .collect::<Result<Vec<RecordBatch>, _>>()
        .map_err(other)?;

    debug!(batches = batches.len(), "Decoded record batches");
    batches_to_table(&projected, &batches, &order).map_err(other)
}

/// A schema without fields holds no data at all.
fn ensure_columns(schema: &Schema) -> Result<(), ReadError> {
    if schema.fields().is_empty() {
        return Err(ReadError::Empty("file has no columns".to_string()));
    }
    Ok(())
}

fn build_row_filter(
    clauses: &[FilterClause],
    schema: &Schema,
    parquet_schema: &SchemaDescriptor,
) -> Result<RowFilter, ReadError> {
    let mut predicates: Vec<Box<dyn ArrowPredicate>> = Vec::with_capacity(clauses.len());

    for clause in clauses {
        predicate::validate(clause).map_err(other)?;
        let index = schema.index_of(&clause.field).map_err(|_| {
            ReadError::Other(format!("No match for filter column: {}", clause.field))
        })?;

        let mask = ProjectionMask::roots(parquet_schema, [index]);
        let clause = clause.clone();
        predicates.push(Box::new(ArrowPredicateFn::new(
            mask,
            move |batch: RecordBatch| predicate::evaluate(&clause, batch.column(0)),
        )));
    }

    Ok(RowFilter::new(predicates))
}

fn other<E: std::fmt::Display>(err: E) -> ReadError {
    ReadError::Other(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, Field};

    #[test]
    fn test_schema_without_columns_is_empty() {
        let err = ensure_columns(&Schema::empty()).unwrap_err();
        assert!(matches!(err, ReadError::Empty(ref msg) if msg == "file has no columns"));

        let schema = Schema::new(vec![Field::new("member", DataType::Int64, false)]);
        assert!(ensure_columns(&schema).is_ok());
    }
}
