//! Hash joins over dynamic tables
//!
//! Joins match on a same-named key column on both sides, comparing the
//! canonical key string of each value. A `Null` key never matches. When a
//! non-key column name exists on both sides, the left copy is suffixed
//! `_x` and the right copy `_y`, which is the convention the fact builder
//! relies on to disambiguate the line-level unit price from the header's.

use sl_core::{Table, Value};
use std::collections::{HashMap, HashSet};

/// Inner join: one output row per key match, unmatched rows on either side
/// are dropped. Returns an empty table when the key column is absent from
/// either side.
pub fn inner_join(left: &Table, right: &Table, key: &str) -> Table {
    join(left, right, key, false)
}

/// Left join: every left row appears at least once; right columns are
/// `Null`-filled when nothing matches. One output row per match when a key
/// occurs multiple times on the right. Returns the left table unchanged
/// when the key column is absent from either side.
pub fn left_join(left: &Table, right: &Table, key: &str) -> Table {
    if left.column_index(key).is_none() || right.column_index(key).is_none() {
        return left.clone();
    }
    join(left, right, key, true)
}

fn join(left: &Table, right: &Table, key: &str, keep_unmatched_left: bool) -> Table {
    let (left_key, right_key) = match (left.column_index(key), right.column_index(key)) {
        (Some(l), Some(r)) => (l, r),
        _ => return Table::new(),
    };

    let left_names: HashSet<&str> = left.columns().iter().map(|c| c.as_str()).collect();
    let right_names: HashSet<&str> = right.columns().iter().map(|c| c.as_str()).collect();

    let mut columns: Vec<String> = Vec::with_capacity(left.column_count() + right.column_count());
    for (idx, name) in left.columns().iter().enumerate() {
        if idx != left_key && right_names.contains(name.as_str()) {
            columns.push(format!("{}_x", name));
        } else {
            columns.push(name.clone());
        }
    }
    let right_cols: Vec<usize> = (0..right.column_count()).filter(|&i| i != right_key).collect();
    for &idx in &right_cols {
        let name = &right.columns()[idx];
        if left_names.contains(name.as_str()) {
            columns.push(format!("{}_y", name));
        } else {
            columns.push(name.clone());
        }
    }

    // Index the right side, preserving match order per key
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for row_idx in 0..right.row_count() {
        if let Some(key_value) = right.value_at(row_idx, right_key).key_string() {
            index.entry(key_value).or_default().push(row_idx);
        }
    }

    let mut result = Table::with_columns(columns);
    for left_idx in 0..left.row_count() {
        let left_row: Vec<Value> = (0..left.column_count())
            .map(|c| left.value_at(left_idx, c).clone())
            .collect();

        let matches = left
            .value_at(left_idx, left_key)
            .key_string()
            .and_then(|k| index.get(&k));

        match matches {
            Some(right_rows) => {
                for &right_idx in right_rows {
                    let mut row = left_row.clone();
                    for &c in &right_cols {
                        row.push(right.value_at(right_idx, c).clone());
                    }
                    result.push_row(row);
                }
            }
            None if keep_unmatched_left => {
                let mut row = left_row;
                row.extend(std::iter::repeat(Value::Null).take(right_cols.len()));
                result.push_row(row);
            }
            None => {}
        }
    }

    result
}

#[cfg(test)]
#[path = "join_test.rs"]
mod tests;
