//! Load command implementation

use anyhow::{Context, Result};
use sl_warehouse::load_warehouse;

use crate::cli::{GlobalArgs, LoadArgs};
use crate::commands::common;

/// Execute the load command
pub(crate) fn execute(_args: &LoadArgs, global: &GlobalArgs) -> Result<()> {
    let project = common::load_project(global)?;
    let staging_dir = project.config.staging_dir_absolute(&project.root);
    let warehouse_dir = project.config.warehouse_dir_absolute(&project.root);

    println!("Loading warehouse from {}...\n", staging_dir.display());

    let report = load_warehouse(&staging_dir, &warehouse_dir).context("Load failed")?;

    for table in &report.loaded {
        println!("  ✓ {} ({} rows)", table.name, table.rows);
    }
    for name in &report.skipped {
        println!("  ✗ {} - staging file missing or empty", name);
    }

    println!(
        "\nLoaded {} table(s), skipped {} into {}",
        report.loaded.len(),
        report.skipped.len(),
        warehouse_dir.display()
    );
    Ok(())
}
