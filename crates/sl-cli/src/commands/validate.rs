//! Validate command implementation

use anyhow::Result;
use sl_warehouse::{validate_warehouse, TableStatus};

use crate::cli::{GlobalArgs, ValidateArgs};
use crate::commands::common;

/// Execute the validate command
pub(crate) fn execute(_args: &ValidateArgs, global: &GlobalArgs) -> Result<()> {
    let project = common::load_project(global)?;
    let warehouse_dir = project.config.warehouse_dir_absolute(&project.root);

    println!("Validating warehouse at {}...\n", warehouse_dir.display());

    let report = validate_warehouse(&warehouse_dir);

    for table in &report.tables {
        match &table.status {
            TableStatus::Ok => {
                if table.null_cells > 0 {
                    println!(
                        "  ✓ {} ({} rows, {} null cells)",
                        table.table, table.rows, table.null_cells
                    );
                } else {
                    println!("  ✓ {} ({} rows)", table.table, table.rows);
                }
            }
            TableStatus::Missing => println!("  ✗ {} - missing", table.table),
            TableStatus::Empty => println!("  ✗ {} - empty", table.table),
            TableStatus::Unreadable(message) => {
                println!("  ✗ {} - unreadable: {}", table.table, message)
            }
        }
    }

    println!();
    if !report.passed() {
        anyhow::bail!("Warehouse validation failed");
    }
    println!("Warehouse validation passed");
    Ok(())
}
