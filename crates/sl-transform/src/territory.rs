//! Territory enricher
//!
//! Employees map many-to-many onto sales territories, which roll up into
//! regions. The enricher flattens that graph into two per-employee strings
//! consumed by the employee dimension builder.
//!
//! "No enrichment data at all" (missing assignment or territory extracts)
//! is a different condition from "this employee has zero assignments", and
//! the two produce different defaults downstream. The distinction is
//! carried by the `TerritoryInfo` variants; the consuming builder applies
//! the per-employee fallbacks.

use crate::join::left_join;
use sl_core::{Table, Value};
use std::collections::HashMap;

/// Per-employee territory aggregates, or a marker that the enrichment
/// inputs were entirely absent at the source level
#[derive(Debug, Clone, PartialEq)]
pub enum TerritoryInfo {
    /// Assignment or territory data missing entirely; every employee gets
    /// "Unknown" for both attributes
    Unavailable,
    /// Aggregates keyed by employee natural key. Employees absent from the
    /// maps simply had no assignment rows.
    PerEmployee {
        /// All assigned territory names joined with ", " (duplicates and
        /// assignment order preserved)
        territories: HashMap<String, String>,
        /// Distinct region names in first-appearance order, joined with ", "
        regions: HashMap<String, String>,
    },
}

fn description(row: usize, table: &Table, column: &str) -> String {
    match table.get(row, column) {
        Some(value) if !value.is_blank() => value.to_string().trim().to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Aggregate territory and region names per employee from the three
/// enrichment tables
pub fn aggregate_territories(
    assignments: &Table,
    territories: &Table,
    regions: &Table,
) -> TerritoryInfo {
    if assignments.is_empty() || territories.is_empty() {
        log::warn!("Territory enrichment data unavailable, marking all employees Unknown");
        return TerritoryInfo::Unavailable;
    }
    if !assignments.has_column("employeeid") {
        log::warn!("Territory assignments lack an employee key, marking all employees Unknown");
        return TerritoryInfo::Unavailable;
    }

    let mut merged = left_join(assignments, territories, "territoryid");

    let regions_available = !regions.is_empty() && merged.has_column("regionid");
    if regions_available {
        merged = left_join(&merged, regions, "regionid");
    } else {
        log::debug!("Region data unavailable, defaulting region descriptions to Unknown");
    }

    let mut territory_lists: HashMap<String, Vec<String>> = HashMap::new();
    let mut region_lists: HashMap<String, Vec<String>> = HashMap::new();

    for row in 0..merged.row_count() {
        let employee = match merged.get(row, "employeeid").and_then(Value::key_string) {
            Some(key) => key,
            None => continue,
        };

        let territory = description(row, &merged, "territorydescription");
        territory_lists.entry(employee.clone()).or_default().push(territory);

        let region = if regions_available {
            description(row, &merged, "regiondescription")
        } else {
            "Unknown".to_string()
        };
        let region_list = region_lists.entry(employee).or_default();
        if !region_list.contains(&region) {
            region_list.push(region);
        }
    }

    TerritoryInfo::PerEmployee {
        territories: territory_lists
            .into_iter()
            .map(|(k, v)| (k, v.join(", ")))
            .collect(),
        regions: region_lists
            .into_iter()
            .map(|(k, v)| (k, v.join(", ")))
            .collect(),
    }
}

#[cfg(test)]
#[path = "territory_test.rs"]
mod tests;
