//! DimClient builder
//!
//! One row per distinct customer natural key. The loader has already
//! deduplicated on `customerid`; this builder conforms the key, fills the
//! geography columns, and assigns the dense surrogate sequence.

use crate::outcome::{BuildOutcome, EmptyReason};
use sl_core::{Table, Value};

/// Output column set, emitted present-columns-only
const TARGET_COLUMNS: &[&str] = &[
    "sk_client",
    "bk_customer_id",
    "company_name",
    "city",
    "country",
    "region",
];

/// Geography columns defaulted to "Unknown" when the source lacks them
const GEOGRAPHY_COLUMNS: &[&str] = &["city", "country", "region"];

/// Build the client dimension from the loaded customers table
pub fn build_dim_client(customers: &Table) -> BuildOutcome {
    log::info!("Building DimClient dimension");

    if customers.is_empty() {
        return BuildOutcome::Empty(EmptyReason::SourceEmpty("customers"));
    }
    if !customers.has_column("customerid") {
        return BuildOutcome::Empty(EmptyReason::MissingColumn("customerid"));
    }

    let mut dim = customers.clone();
    dim.rename_column("customerid", "bk_customer_id");
    dim.rename_column("companyname", "company_name");

    // Conform the natural key before any downstream lookup uses it
    dim.map_column("bk_customer_id", |v| match v {
        Value::Null => Value::Null,
        other => Value::Str(other.to_string().trim().to_uppercase()),
    });

    for geo in GEOGRAPHY_COLUMNS {
        if !dim.has_column(geo) {
            dim.fill_column(geo, Value::from("Unknown"));
        }
    }

    let surrogate_keys = (1..=dim.row_count() as i64).map(Value::Int).collect();
    dim.set_column("sk_client", surrogate_keys);

    BuildOutcome::Built(dim.select(TARGET_COLUMNS))
}

#[cfg(test)]
#[path = "dim_client_test.rs"]
mod tests;
