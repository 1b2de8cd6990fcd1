//! Staging-to-warehouse load
//!
//! Reads each staging file the transform stage produced and materializes
//! it as a warehouse table in two formats, CSV and parquet, plus one
//! `schema.sql` covering every table that loaded. A missing or empty
//! staging file skips its table rather than failing the run; the validator
//! reports the gap afterwards.

use crate::error::{WarehouseError, WarehouseResult};
use crate::parquet_util::write_parquet;
use crate::schema::{ddl_statement, infer_types};
use sl_core::csv;
use std::path::Path;

/// Staging file stem to warehouse table name
pub const STAGING_TO_WAREHOUSE: &[(&str, &str)] = &[
    ("cleaned_date", "DimDate"),
    ("cleaned_clients", "DimClient"),
    ("cleaned_employees", "DimEmployee"),
    ("cleaned_sales", "FactSales"),
];

/// One successfully loaded warehouse table
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub name: String,
    pub rows: usize,
}

/// Outcome of a load run
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedTable>,
    pub skipped: Vec<String>,
}

/// Load every staging file into the warehouse directory
pub fn load_warehouse(staging_dir: &Path, warehouse_dir: &Path) -> WarehouseResult<LoadReport> {
    log::info!("Loading warehouse at {}", warehouse_dir.display());

    std::fs::create_dir_all(warehouse_dir).map_err(|e| WarehouseError::WarehouseDir {
        path: warehouse_dir.display().to_string(),
        source: e,
    })?;

    let mut report = LoadReport::default();
    let mut statements = Vec::new();

    for (stem, table_name) in STAGING_TO_WAREHOUSE {
        let staging_path = staging_dir.join(format!("{}.csv", stem));
        if !staging_path.is_file() {
            log::warn!(
                "Staging file {} not found, skipping {}",
                staging_path.display(),
                table_name
            );
            report.skipped.push(table_name.to_string());
            continue;
        }

        let table = csv::read_csv(&staging_path).map_err(|e| WarehouseError::StagingRead {
            path: staging_path.display().to_string(),
            source: e,
        })?;
        if table.column_count() == 0 {
            log::warn!(
                "Staging file {} has no columns, skipping {}",
                staging_path.display(),
                table_name
            );
            report.skipped.push(table_name.to_string());
            continue;
        }

        let types = infer_types(&table);

        let csv_path = warehouse_dir.join(format!("{}.csv", table_name));
        csv::write_csv(&table, &csv_path).map_err(|e| WarehouseError::CsvWrite {
            path: csv_path.display().to_string(),
            source: e,
        })?;

        let parquet_path = warehouse_dir.join(format!("{}.parquet", table_name));
        write_parquet(&table, &types, &parquet_path)?;

        statements.push(ddl_statement(table_name, &table, &types));
        log::info!("Loaded {}: {} row(s)", table_name, table.row_count());
        report.loaded.push(LoadedTable {
            name: table_name.to_string(),
            rows: table.row_count(),
        });
    }

    if !statements.is_empty() {
        let schema_path = warehouse_dir.join("schema.sql");
        std::fs::write(&schema_path, statements.join("\n")).map_err(|e| {
            WarehouseError::SchemaWrite {
                path: schema_path.display().to_string(),
                source: e,
            }
        })?;
        log::info!("Schema written to {}", schema_path.display());
    }

    Ok(report)
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
