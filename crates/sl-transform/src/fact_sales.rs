//! FactSales builder
//!
//! One fact row per order line. Lines join to their order header
//! (inner join, so a line without a header or a header without lines
//! contributes nothing), derive the sale measures, and resolve dimension
//! foreign keys by natural-key lookup. Lookups are best-effort: a customer
//! or employee with no dimension row yields a `Null` foreign key and the
//! fact row is kept.

use crate::dates::{date_key, parse_date, SENTINEL_DATE_KEY};
use crate::join::inner_join;
use crate::outcome::{BuildOutcome, EmptyReason};
use sl_core::{Table, Value};
use std::collections::HashMap;

/// Output column set, emitted present-columns-only
const TARGET_COLUMNS: &[&str] = &[
    "fact_id",
    "bk_order_id",
    "sk_client",
    "sk_employee",
    "sk_date",
    "quantity",
    "unit_price",
    "discount",
    "total_amount",
    "delivery_status",
];

/// Resolve surrogate keys for every fact row by natural-key lookup against
/// a dimension. Returns `None` when the dimension cannot serve lookups at
/// all (empty or missing its key columns), in which case the foreign-key
/// column is omitted from the output entirely.
fn resolve_dimension_keys(
    fact: &Table,
    fact_key: &str,
    dim: &Table,
    dim_key: &str,
    dim_sk: &str,
) -> Option<Vec<Value>> {
    if dim.is_empty() || !dim.has_column(dim_key) || !dim.has_column(dim_sk) {
        return None;
    }

    let mut lookup: HashMap<String, Value> = HashMap::new();
    for row in 0..dim.row_count() {
        if let Some(key) = dim.get(row, dim_key).and_then(Value::key_string) {
            // Keep the first surrogate for a duplicated natural key
            if let Some(sk) = dim.get(row, dim_sk) {
                lookup.entry(key).or_insert_with(|| sk.clone());
            }
        }
    }

    let values = (0..fact.row_count())
        .map(|row| {
            fact.get(row, fact_key)
                .and_then(Value::key_string)
                .and_then(|key| lookup.get(&key).cloned())
                .unwrap_or(Value::Null)
        })
        .collect();
    Some(values)
}

/// Build the sales fact from loaded orders and order lines plus the built
/// client and employee dimensions
pub fn build_fact_sales(
    orders: &Table,
    details: &Table,
    dim_client: &Table,
    dim_employee: &Table,
) -> BuildOutcome {
    log::info!("Building FactSales fact table");

    if orders.is_empty() {
        return BuildOutcome::Empty(EmptyReason::SourceEmpty("orders"));
    }
    if details.is_empty() {
        return BuildOutcome::Empty(EmptyReason::SourceEmpty("order_details"));
    }
    if !orders.has_column("orderid") || !details.has_column("orderid") {
        return BuildOutcome::Empty(EmptyReason::MissingColumn("orderid"));
    }

    let mut fact = inner_join(details, orders, "orderid");

    // Line-level price wins when both the line and the header carry one;
    // the join suffixes the line's copy with _x
    let price_column = if fact.has_column("unitprice_x") {
        "unitprice_x"
    } else if fact.has_column("unitprice") {
        "unitprice"
    } else {
        return BuildOutcome::Empty(EmptyReason::MissingColumn("unitprice"));
    };
    for measure in ["quantity", "discount"] {
        if !fact.has_column(measure) {
            return BuildOutcome::Empty(EmptyReason::MissingColumn(measure));
        }
    }

    let mut unparseable_measures = 0usize;
    let totals: Vec<Value> = (0..fact.row_count())
        .map(|row| {
            let price = fact.get(row, price_column).and_then(Value::as_f64);
            let quantity = fact.get(row, "quantity").and_then(Value::as_f64);
            let discount = fact.get(row, "discount").and_then(Value::as_f64);
            match (price, quantity, discount) {
                (Some(p), Some(q), Some(d)) => Value::Float(p * q * (1.0 - d)),
                _ => {
                    unparseable_measures += 1;
                    Value::Null
                }
            }
        })
        .collect();
    if unparseable_measures > 0 {
        log::warn!(
            "FactSales: {} row(s) with unparseable measures, total_amount left null",
            unparseable_measures
        );
    }
    fact.set_column("total_amount", totals);

    let statuses: Vec<Value> = (0..fact.row_count())
        .map(|row| {
            let delivered = fact
                .get(row, "shippeddate")
                .is_some_and(|v| !v.is_blank());
            Value::from(if delivered { "Delivered" } else { "Not Delivered" })
        })
        .collect();
    fact.set_column("delivery_status", statuses);

    // Conform the customer key the same way DimClient does before lookup
    fact.map_column("customerid", |v| match v {
        Value::Null => Value::Null,
        other => Value::Str(other.to_string().trim().to_uppercase()),
    });

    if let Some(keys) =
        resolve_dimension_keys(&fact, "customerid", dim_client, "bk_customer_id", "sk_client")
    {
        fact.set_column("sk_client", keys);
    }
    if let Some(keys) = resolve_dimension_keys(
        &fact,
        "employeeid",
        dim_employee,
        "bk_employee_id",
        "sk_employee",
    ) {
        fact.set_column("sk_employee", keys);
    }

    let mut sentinel_dates = 0usize;
    let date_keys: Vec<Value> = (0..fact.row_count())
        .map(|row| {
            let parsed = fact
                .get(row, "orderdate")
                .map(|v| v.to_string())
                .as_deref()
                .and_then(parse_date);
            match parsed {
                Some(date) => Value::Int(date_key(date)),
                None => {
                    sentinel_dates += 1;
                    Value::Int(SENTINEL_DATE_KEY)
                }
            }
        })
        .collect();
    if sentinel_dates > 0 {
        log::warn!(
            "FactSales: {} row(s) with missing or unparseable order dates, using sentinel {}",
            sentinel_dates,
            SENTINEL_DATE_KEY
        );
    }
    fact.set_column("sk_date", date_keys);

    fact.rename_column("orderid", "bk_order_id");
    fact.rename_column(price_column, "unit_price");

    let fact_ids = (1..=fact.row_count() as i64).map(Value::Int).collect();
    fact.set_column("fact_id", fact_ids);

    BuildOutcome::Built(fact.select(TARGET_COLUMNS))
}

#[cfg(test)]
#[path = "fact_sales_test.rs"]
mod tests;
