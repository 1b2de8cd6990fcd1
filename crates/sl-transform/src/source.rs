//! Source loader
//!
//! A logical table may have been extracted by more than one source
//! connector, each dropping a `<source>_<table>.csv` file into the raw
//! directory with its own header spelling. The loader globs all extracts
//! for a table, normalizes the headers to a common form, concatenates in
//! discovery order, and deduplicates on the declared natural key
//! (keep-first, so the first-loaded connector wins overlaps).

use sl_core::{csv, Table};
use std::path::Path;

/// Normalize a source column name: lowercase, trim, and remove internal
/// spaces and underscores (`"Order ID"`, `order_id` and `OrderID` all
/// become `orderid`). Collisions after normalization are last-wins.
pub fn normalize_column_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '_')
        .collect()
}

/// Rebuild a table with normalized headers. When two source columns
/// normalize to the same name, the later column's values win.
fn normalize_headers(table: &Table) -> Table {
    let mut names: Vec<String> = Vec::new();
    let mut sources: Vec<usize> = Vec::new();

    for (idx, name) in table.columns().iter().enumerate() {
        let normalized = normalize_column_name(name);
        match names.iter().position(|n| *n == normalized) {
            Some(pos) => sources[pos] = idx,
            None => {
                names.push(normalized);
                sources.push(idx);
            }
        }
    }

    let mut result = Table::with_columns(names);
    for row in table.rows() {
        result.push_row(sources.iter().map(|&i| row[i].clone()).collect());
    }
    result
}

/// Load and merge every raw extract of a logical table.
///
/// Missing files and unreadable files are logged and skipped, never fatal:
/// no extract at all simply yields an empty table that degrades the
/// downstream builders to empty output.
pub fn load_source_table(raw_dir: &Path, table_name: &str, key_columns: &[&str]) -> Table {
    let pattern = raw_dir
        .join(format!("*_{}.csv", table_name))
        .display()
        .to_string();

    let mut paths: Vec<_> = match glob::glob(&pattern) {
        Ok(entries) => entries.filter_map(Result::ok).collect(),
        Err(e) => {
            log::warn!("Invalid raw-extract pattern '{}': {}", pattern, e);
            Vec::new()
        }
    };
    paths.sort();

    log::info!(
        "Loading '{}': found {} source file(s)",
        table_name,
        paths.len()
    );

    let mut combined = Table::new();
    for path in &paths {
        match csv::read_csv(path) {
            Ok(table) => combined.append(normalize_headers(&table)),
            Err(e) => log::warn!("Skipping source file {}: {}", path.display(), e),
        }
    }

    let normalized_keys: Vec<String> = key_columns
        .iter()
        .map(|k| normalize_column_name(k))
        .collect();
    let key_refs: Vec<&str> = normalized_keys.iter().map(|k| k.as_str()).collect();

    let before = combined.row_count();
    if combined.dedup_by(&key_refs) {
        let dropped = before - combined.row_count();
        if dropped > 0 {
            log::info!("'{}': dropped {} duplicate row(s)", table_name, dropped);
        }
    } else if before > 0 {
        log::debug!(
            "'{}': key columns {:?} not all present, skipping dedup",
            table_name,
            normalized_keys
        );
    }

    combined
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
