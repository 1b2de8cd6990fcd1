//! Run command implementation - the full transform/load/validate pipeline

use anyhow::{Context, Result};
use std::time::Instant;

use crate::cli::{GlobalArgs, LoadArgs, RunArgs, TransformArgs, ValidateArgs};
use crate::commands::{load, transform, validate};

fn timed(name: &str, result: Result<()>, started: Instant) -> Result<()> {
    result.with_context(|| format!("{} phase failed", name))?;
    println!("{} phase finished in {:.2}s\n", name, started.elapsed().as_secs_f64());
    Ok(())
}

/// Execute the run command: transform, load, validate, stopping at the
/// first phase that fails
pub(crate) fn execute(_args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let total = Instant::now();

    let started = Instant::now();
    timed("Transform", transform::execute(&TransformArgs {}, global), started)?;

    let started = Instant::now();
    timed("Load", load::execute(&LoadArgs {}, global), started)?;

    let started = Instant::now();
    timed("Validate", validate::execute(&ValidateArgs {}, global), started)?;

    println!("Pipeline completed in {:.2}s", total.elapsed().as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalArgs;
    use tempfile::TempDir;

    fn global_for(dir: &std::path::Path) -> GlobalArgs {
        GlobalArgs {
            verbose: false,
            project_dir: dir.display().to_string(),
        }
    }

    fn seed_project(root: &std::path::Path) {
        std::fs::write(root.join("starlift.yml"), "name: demo\n").unwrap();
        let raw = root.join("data/raw");
        std::fs::create_dir_all(&raw).unwrap();
        std::fs::write(
            raw.join("sqlserver_orders.csv"),
            "OrderID,CustomerID,EmployeeID,OrderDate,ShippedDate\n\
             10248,VINET,5,1996-07-04,1996-07-16\n",
        )
        .unwrap();
        std::fs::write(
            raw.join("sqlserver_order_details.csv"),
            "OrderID,ProductID,UnitPrice,Quantity,Discount\n10248,11,10.00,5,0\n",
        )
        .unwrap();
        std::fs::write(
            raw.join("sqlserver_customers.csv"),
            "CustomerID,CompanyName\nVINET,Vins et alcools\n",
        )
        .unwrap();
        std::fs::write(
            raw.join("sqlserver_employees.csv"),
            "EmployeeID,FirstName,LastName\n5,Steven,Buchanan\n",
        )
        .unwrap();
    }

    #[test]
    fn test_full_pipeline_produces_validated_warehouse() {
        let dir = TempDir::new().unwrap();
        seed_project(dir.path());

        execute(&RunArgs {}, &global_for(dir.path())).unwrap();

        let warehouse = dir.path().join("data/warehouse");
        for name in ["DimDate", "DimClient", "DimEmployee", "FactSales"] {
            assert!(warehouse.join(format!("{}.parquet", name)).exists());
        }
        assert!(warehouse.join("schema.sql").exists());
    }

    #[test]
    fn test_pipeline_fails_validation_when_a_source_is_missing() {
        let dir = TempDir::new().unwrap();
        seed_project(dir.path());
        // No customers extract: DimClient degrades to empty, load skips it,
        // validation reports it missing
        std::fs::remove_file(dir.path().join("data/raw/sqlserver_customers.csv")).unwrap();

        let err = execute(&RunArgs {}, &global_for(dir.path())).unwrap_err();
        assert!(err.to_string().contains("Validate phase failed"));
    }

    #[test]
    fn test_missing_config_aborts_before_transform() {
        let dir = TempDir::new().unwrap();
        let err = execute(&RunArgs {}, &global_for(dir.path())).unwrap_err();
        assert!(err.to_string().contains("Transform phase failed"));
        assert!(!dir.path().join("data/staging").exists());
    }
}
