//! DimDate builder
//!
//! One row per distinct calendar date appearing in any order, ascending.
//! The date key is integer-encoded from the date itself (YYYYMMDD), never
//! assigned independently.

use crate::dates::{date_key, month_name, parse_date, quarter};
use crate::outcome::{BuildOutcome, EmptyReason};
use chrono::Datelike;
use sl_core::{Table, Value};
use std::collections::BTreeSet;

/// Build the date dimension from the loaded orders table
pub fn build_dim_date(orders: &Table) -> BuildOutcome {
    log::info!("Building DimDate dimension");

    if orders.is_empty() {
        return BuildOutcome::Empty(EmptyReason::SourceEmpty("orders"));
    }
    if !orders.has_column("orderdate") {
        return BuildOutcome::Empty(EmptyReason::MissingColumn("orderdate"));
    }

    let mut dates = BTreeSet::new();
    let mut dropped = 0usize;
    for row in 0..orders.row_count() {
        let raw = orders.get(row, "orderdate").map(|v| v.to_string());
        match raw.as_deref().and_then(parse_date) {
            Some(date) => {
                dates.insert(date);
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("DimDate: dropped {} unparseable order date(s)", dropped);
    }

    let mut dim = Table::with_columns([
        "full_date",
        "sk_date",
        "year",
        "month",
        "month_name",
        "quarter",
    ]);
    for date in dates {
        dim.push_row(vec![
            Value::Str(date.format("%Y-%m-%d").to_string()),
            Value::Int(date_key(date)),
            Value::Int(date.year() as i64),
            Value::Int(date.month() as i64),
            Value::from(month_name(date.month())),
            Value::Int(quarter(date.month()) as i64),
        ]);
    }

    BuildOutcome::Built(dim)
}

#[cfg(test)]
#[path = "dim_date_test.rs"]
mod tests;
