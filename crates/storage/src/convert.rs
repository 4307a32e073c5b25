//! Conversion of Arrow record batches into [`Table`] cells.

use arrow::array::{Array, ArrayRef, AsArray, RecordBatch};
use arrow::datatypes::{
    DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type, SchemaRef,
    UInt16Type, UInt32Type, UInt64Type, UInt8Type,
};
use arrow::error::ArrowError;
use arrow::util::display::array_value_to_string;

use spectra_common::{CellValue, Column, Table};

use crate::predicate::decode_dictionary;

/// Assemble a table from batches sharing `schema`, with columns in `order`.
pub(crate) fn batches_to_table(
    schema: &SchemaRef,
    batches: &[RecordBatch],
    order: &[String],
) -> Result<Table, ArrowError> {
    let num_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    let mut columns = Vec::with_capacity(order.len());

    for name in order {
        let index = schema.index_of(name)?;
        let mut values = Vec::with_capacity(num_rows);
        for batch in batches {
            append_cells(batch.column(index), &mut values)?;
        }
        columns.push(Column::new(name.clone(), values));
    }

    Table::try_from_columns(columns).map_err(|e| ArrowError::SchemaError(e.to_string()))
}

fn append_cells(array: &ArrayRef, out: &mut Vec<CellValue>) -> Result<(), ArrowError> {
    let array = decode_dictionary(array)?;
    for row in 0..array.len() {
        out.push(cell_value(array.as_ref(), row)?);
    }
    Ok(())
}

fn cell_value(array: &dyn Array, row: usize) -> Result<CellValue, ArrowError> {
    if array.is_null(row) {
        return Ok(CellValue::Null);
    }

    let cell = match array.data_type() {
        DataType::Boolean => CellValue::Bool(array.as_boolean().value(row)),
        DataType::Int8 => CellValue::Int(array.as_primitive::<Int8Type>().value(row).into()),
        DataType::Int16 => CellValue::Int(array.as_primitive::<Int16Type>().value(row).into()),
        DataType::Int32 => CellValue::Int(array.as_primitive::<Int32Type>().value(row).into()),
        DataType::Int64 => CellValue::Int(array.as_primitive::<Int64Type>().value(row)),
        DataType::UInt8 => CellValue::Int(array.as_primitive::<UInt8Type>().value(row).into()),
        DataType::UInt16 => CellValue::Int(array.as_primitive::<UInt16Type>().value(row).into()),
        DataType::UInt32 => CellValue::Int(array.as_primitive::<UInt32Type>().value(row).into()),
        DataType::UInt64 => CellValue::UInt(array.as_primitive::<UInt64Type>().value(row)),
        DataType::Float32 => {
            CellValue::Float(array.as_primitive::<Float32Type>().value(row).into())
        }
        DataType::Float64 => CellValue::Float(array.as_primitive::<Float64Type>().value(row)),
        DataType::Utf8 => CellValue::Str(array.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::Str(array.as_string::<i64>().value(row).to_string()),
        DataType::Binary => CellValue::Binary(array.as_binary::<i32>().value(row).to_vec()),
        DataType::LargeBinary => CellValue::Binary(array.as_binary::<i64>().value(row).to_vec()),
        DataType::FixedSizeBinary(_) => {
            CellValue::Binary(array.as_fixed_size_binary().value(row).to_vec())
        }
        DataType::List(_) => list_cell(&array.as_list::<i32>().value(row))?,
        DataType::LargeList(_) => list_cell(&array.as_list::<i64>().value(row))?,
        DataType::FixedSizeList(_, _) => list_cell(&array.as_fixed_size_list().value(row))?,
        // Timestamps, decimals, structs: keep Arrow's display form.
        _ => CellValue::Str(array_value_to_string(array, row)?),
    };
    Ok(cell)
}

fn list_cell(values: &ArrayRef) -> Result<CellValue, ArrowError> {
    let values = decode_dictionary(values)?;
    (0..values.len())
        .map(|i| cell_value(values.as_ref(), i))
        .collect::<Result<Vec<_>, _>>()
        .map(CellValue::List)
}
