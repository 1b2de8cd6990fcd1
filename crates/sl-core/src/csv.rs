//! CSV read/write for the dynamic table type
//!
//! Raw extracts are UTF-8, comma-delimited, with a verbatim header row.
//! Every cell loads as a string value; empty cells become `Null` so that
//! blank shipped dates and absent foreign keys are distinguishable from
//! empty text downstream.

use crate::error::{CoreError, CoreResult};
use crate::table::{Table, Value};
use std::path::Path;

/// Read a CSV file into a table. Header names are taken verbatim;
/// normalization is the source loader's job.
pub fn read_csv(path: &Path) -> CoreResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| CoreError::CsvRead {
            path: path.display().to_string(),
            source: e,
        })?;

    let headers = reader.headers().map_err(|e| CoreError::CsvRead {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut table = Table::with_columns(headers.iter().map(|h| h.to_string()));

    for record in reader.records() {
        let record = record.map_err(|e| CoreError::CsvRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Value::Null
                } else {
                    Value::Str(field.to_string())
                }
            })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

/// Write a table as a comma-delimited CSV file with a header row.
/// `Null` cells are written as empty fields. A table with no columns
/// produces an empty file.
pub fn write_csv(table: &Table, path: &Path) -> CoreResult<()> {
    if table.column_count() == 0 {
        std::fs::write(path, "").map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| CoreError::CsvWrite {
        path: path.display().to_string(),
        source: e,
    })?;

    let write_err = |e| CoreError::CsvWrite {
        path: path.display().to_string(),
        source: e,
    };

    writer.write_record(table.columns()).map_err(write_err)?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|v| v.to_string()))
            .map_err(write_err)?;
    }
    writer.flush().map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_csv_basic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "Order ID,Ship City\n10248,Reims\n10249,,\n").unwrap();

        let table = read_csv(&path).unwrap();
        assert_eq!(table.columns(), &["Order ID", "Ship City"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, "Ship City"), Some(&Value::from("Reims")));
        // Empty cell reads back as Null, not empty text
        assert_eq!(table.get(1, "Ship City"), Some(&Value::Null));
    }

    #[test]
    fn test_read_csv_ragged_rows_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b,c\n1,2\n1,2,3,4\n").unwrap();

        let table = read_csv(&path).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, "c"), Some(&Value::Null));
        assert_eq!(table.get(1, "c"), Some(&Value::from("3")));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_csv(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(CoreError::CsvRead { .. })));
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let mut table = Table::with_columns(["sk", "name"]);
        table.push_row(vec![Value::Int(1), Value::from("Alice")]);
        table.push_row(vec![Value::Int(2), Value::Null]);
        write_csv(&table, &path).unwrap();

        let loaded = read_csv(&path).unwrap();
        assert_eq!(loaded.columns(), &["sk", "name"]);
        assert_eq!(loaded.get(0, "sk"), Some(&Value::from("1")));
        assert_eq!(loaded.get(1, "name"), Some(&Value::Null));
    }

    #[test]
    fn test_write_empty_table_produces_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&Table::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
