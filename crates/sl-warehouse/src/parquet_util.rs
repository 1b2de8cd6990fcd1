//! Parquet encoding and decoding for warehouse tables
//!
//! Each table is written as a single record batch. The Arrow schema comes
//! from the inferred logical types: integer columns become `Int64`, decimal
//! columns `Float64`, and date and text columns stay `Utf8`. Every field is
//! nullable since any cell may be null after a degraded transform.

use crate::error::{WarehouseError, WarehouseResult};
use crate::schema::LogicalType;
use arrow::array::{Array, ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use sl_core::{Table, Value};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

fn arrow_type(logical_type: LogicalType) -> DataType {
    match logical_type {
        LogicalType::Integer => DataType::Int64,
        LogicalType::Decimal => DataType::Float64,
        LogicalType::Date | LogicalType::Text => DataType::Utf8,
    }
}

fn column_array(table: &Table, column: usize, logical_type: LogicalType) -> ArrayRef {
    match logical_type {
        LogicalType::Integer => {
            let values: Vec<Option<i64>> = table.rows().map(|row| row[column].as_i64()).collect();
            Arc::new(Int64Array::from(values))
        }
        LogicalType::Decimal => {
            let values: Vec<Option<f64>> = table.rows().map(|row| row[column].as_f64()).collect();
            Arc::new(Float64Array::from(values))
        }
        LogicalType::Date | LogicalType::Text => {
            let values: Vec<Option<String>> = table
                .rows()
                .map(|row| match &row[column] {
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            Arc::new(StringArray::from(values))
        }
    }
}

/// Write a table to a parquet file as one record batch
pub fn write_parquet(table: &Table, types: &[LogicalType], path: &Path) -> WarehouseResult<()> {
    let fields: Vec<Field> = table
        .columns()
        .iter()
        .zip(types)
        .map(|(name, logical_type)| Field::new(name, arrow_type(*logical_type), true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let arrays: Vec<ArrayRef> = (0..table.column_count())
        .map(|col| column_array(table, col, types[col]))
        .collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    let file = File::create(path).map_err(|e| WarehouseError::ParquetFile {
        path: path.display().to_string(),
        source: e,
    })?;
    let parquet_err = |e| WarehouseError::Parquet {
        path: path.display().to_string(),
        source: e,
    };
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, schema, Some(props)).map_err(parquet_err)?;
    writer.write(&batch).map_err(parquet_err)?;
    writer.close().map_err(parquet_err)?;
    Ok(())
}

fn cell_value(array: &ArrayRef, row: usize) -> Value {
    if array.is_null(row) {
        return Value::Null;
    }
    if let Some(ints) = array.as_any().downcast_ref::<Int64Array>() {
        return Value::Int(ints.value(row));
    }
    if let Some(floats) = array.as_any().downcast_ref::<Float64Array>() {
        return Value::Float(floats.value(row));
    }
    if let Some(strings) = array.as_any().downcast_ref::<StringArray>() {
        return Value::Str(strings.value(row).to_string());
    }
    Value::Null
}

/// Read a parquet file back into a table
pub fn read_parquet(path: &Path) -> WarehouseResult<Table> {
    let file = File::open(path).map_err(|e| WarehouseError::ParquetFile {
        path: path.display().to_string(),
        source: e,
    })?;
    let parquet_err = |e| WarehouseError::Parquet {
        path: path.display().to_string(),
        source: e,
    };

    let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(parquet_err)?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().clone())
        .collect();
    let mut table = Table::with_columns(columns);

    let reader = builder.build().map_err(parquet_err)?;
    for batch in reader {
        let batch = batch?;
        for row in 0..batch.num_rows() {
            let values = (0..batch.num_columns())
                .map(|col| cell_value(batch.column(col), row))
                .collect();
            table.push_row(values);
        }
    }
    Ok(table)
}

#[cfg(test)]
#[path = "parquet_util_test.rs"]
mod tests;
