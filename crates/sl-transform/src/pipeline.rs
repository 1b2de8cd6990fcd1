//! Transformation orchestrator
//!
//! Sequences the full transform stage: load the seven source tables, build
//! the three dimensions and the fact, and persist the staging outputs.
//! Builders that degrade to empty are logged and written as empty files;
//! only unexpected I/O failures abort the run, and outputs already written
//! by the same run are left in place (no rollback).

use crate::dim_client::build_dim_client;
use crate::dim_date::build_dim_date;
use crate::dim_employee::build_dim_employee;
use crate::error::{TransformError, TransformResult};
use crate::fact_sales::build_fact_sales;
use crate::outcome::BuildOutcome;
use crate::source::load_source_table;
use sl_core::{csv, Table};
use std::path::Path;

/// Staging file written for the date dimension
pub const STAGING_DATE: &str = "cleaned_date.csv";
/// Staging file written for the client dimension
pub const STAGING_CLIENTS: &str = "cleaned_clients.csv";
/// Staging file written for the employee dimension
pub const STAGING_EMPLOYEES: &str = "cleaned_employees.csv";
/// Staging file written for the sales fact
pub const STAGING_SALES: &str = "cleaned_sales.csv";

/// The four tables produced by one transformation run
#[derive(Debug, Clone)]
pub struct TransformOutputs {
    pub dim_date: Table,
    pub dim_client: Table,
    pub dim_employee: Table,
    pub fact_sales: Table,
}

fn finish(name: &str, outcome: BuildOutcome) -> Table {
    match outcome.empty_reason() {
        Some(reason) => log::warn!("{} degraded to empty output: {}", name, reason),
        None => {
            if let Some(table) = outcome.table() {
                log::info!("{}: {} row(s)", name, table.row_count());
            }
        }
    }
    outcome.into_table()
}

fn write_staging(table: &Table, staging_dir: &Path, file_name: &str) -> TransformResult<()> {
    let path = staging_dir.join(file_name);
    csv::write_csv(table, &path).map_err(|e| TransformError::StagingWrite {
        path: path.display().to_string(),
        source: e,
    })
}

/// Run the transform stage end to end: raw extracts in, staging files out
pub fn run_transformation(raw_dir: &Path, staging_dir: &Path) -> TransformResult<TransformOutputs> {
    log::info!("Starting transformation from {}", raw_dir.display());

    let orders = load_source_table(raw_dir, "orders", &["orderid"]);
    let details = load_source_table(raw_dir, "order_details", &["orderid", "productid"]);
    let customers = load_source_table(raw_dir, "customers", &["customerid"]);
    let employees = load_source_table(raw_dir, "employees", &["employeeid"]);
    let assignments =
        load_source_table(raw_dir, "employeeterritories", &["employeeid", "territoryid"]);
    let territories = load_source_table(raw_dir, "territories", &["territoryid"]);
    let regions = load_source_table(raw_dir, "region", &["regionid"]);

    let dim_date = finish("DimDate", build_dim_date(&orders));
    let dim_client = finish("DimClient", build_dim_client(&customers));
    let dim_employee = finish(
        "DimEmployee",
        build_dim_employee(&employees, &assignments, &territories, &regions),
    );
    let fact_sales = finish(
        "FactSales",
        build_fact_sales(&orders, &details, &dim_client, &dim_employee),
    );

    std::fs::create_dir_all(staging_dir).map_err(|e| TransformError::StagingDir {
        path: staging_dir.display().to_string(),
        source: e,
    })?;

    write_staging(&dim_date, staging_dir, STAGING_DATE)?;
    write_staging(&dim_client, staging_dir, STAGING_CLIENTS)?;
    write_staging(&dim_employee, staging_dir, STAGING_EMPLOYEES)?;
    write_staging(&fact_sales, staging_dir, STAGING_SALES)?;

    log::info!("Transformation complete, staging written to {}", staging_dir.display());

    Ok(TransformOutputs {
        dim_date,
        dim_client,
        dim_employee,
        fact_sales,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
