//! DimEmployee builder
//!
//! Conforms the employee natural key, derives the display name, and merges
//! the territory enricher's per-employee aggregates. Employees without
//! assignment rows get "No Territory" / "No Region"; when the enrichment
//! extracts are missing entirely every employee gets "Unknown" instead.

use crate::outcome::{BuildOutcome, EmptyReason};
use crate::territory::{aggregate_territories, TerritoryInfo};
use sl_core::{Table, Value};

/// Output column set, emitted present-columns-only.
/// `Employee_name` is spelled exactly as the warehouse defines it.
const TARGET_COLUMNS: &[&str] = &[
    "sk_employee",
    "bk_employee_id",
    "Employee_name",
    "title",
    "city",
    "country",
    "sales_region",
    "territories",
];

fn stringified(value: Option<&Value>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Build the employee dimension from the loaded employees table and the
/// three enrichment tables
pub fn build_dim_employee(
    employees: &Table,
    assignments: &Table,
    territories: &Table,
    regions: &Table,
) -> BuildOutcome {
    log::info!("Building DimEmployee dimension");

    if employees.is_empty() {
        return BuildOutcome::Empty(EmptyReason::SourceEmpty("employees"));
    }
    if !employees.has_column("employeeid") {
        return BuildOutcome::Empty(EmptyReason::MissingColumn("employeeid"));
    }

    let mut dim = employees.clone();
    dim.rename_column("employeeid", "bk_employee_id");
    dim.rename_column("firstname", "first_name");
    dim.rename_column("lastname", "last_name");

    let names: Vec<Value> = (0..dim.row_count())
        .map(|row| {
            let first = stringified(dim.get(row, "first_name"));
            let last = stringified(dim.get(row, "last_name"));
            Value::Str(format!("{} {}", first, last))
        })
        .collect();
    dim.set_column("Employee_name", names);

    let surrogate_keys = (1..=dim.row_count() as i64).map(Value::Int).collect();
    dim.set_column("sk_employee", surrogate_keys);

    match aggregate_territories(assignments, territories, regions) {
        TerritoryInfo::Unavailable => {
            dim.fill_column("territories", Value::from("Unknown"));
            dim.fill_column("sales_region", Value::from("Unknown"));
        }
        TerritoryInfo::PerEmployee {
            territories: per_employee_territories,
            regions: per_employee_regions,
        } => {
            let mut territory_values = Vec::with_capacity(dim.row_count());
            let mut region_values = Vec::with_capacity(dim.row_count());
            for row in 0..dim.row_count() {
                let key = dim.get(row, "bk_employee_id").and_then(Value::key_string);
                let (territory, region) = match key {
                    Some(key) => (
                        per_employee_territories.get(&key).cloned(),
                        per_employee_regions.get(&key).cloned(),
                    ),
                    None => (None, None),
                };
                territory_values
                    .push(Value::Str(territory.unwrap_or_else(|| "No Territory".to_string())));
                region_values.push(Value::Str(region.unwrap_or_else(|| "No Region".to_string())));
            }
            dim.set_column("territories", territory_values);
            dim.set_column("sales_region", region_values);
        }
    }

    BuildOutcome::Built(dim.select(TARGET_COLUMNS))
}

#[cfg(test)]
#[path = "dim_employee_test.rs"]
mod tests;
