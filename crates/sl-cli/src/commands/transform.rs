//! Transform command implementation

use anyhow::{Context, Result};
use sl_transform::run_transformation;

use crate::cli::{GlobalArgs, TransformArgs};
use crate::commands::common;

/// Execute the transform command
pub(crate) fn execute(_args: &TransformArgs, global: &GlobalArgs) -> Result<()> {
    let project = common::load_project(global)?;
    let raw_dir = project.config.raw_dir_absolute(&project.root);
    let staging_dir = project.config.staging_dir_absolute(&project.root);

    println!("Transforming raw extracts from {}...\n", raw_dir.display());

    let outputs = run_transformation(&raw_dir, &staging_dir).context("Transformation failed")?;

    for (name, table) in [
        ("DimDate", &outputs.dim_date),
        ("DimClient", &outputs.dim_client),
        ("DimEmployee", &outputs.dim_employee),
        ("FactSales", &outputs.fact_sales),
    ] {
        if table.is_empty() {
            println!("  ✗ {} (empty)", name);
        } else {
            println!("  ✓ {} ({} rows)", name, table.row_count());
        }
    }

    println!("\nStaging written to {}", staging_dir.display());
    Ok(())
}
