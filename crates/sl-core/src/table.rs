//! Schema-less tabular data abstraction
//!
//! Source extracts have free-form column sets discovered at run time, so the
//! pipeline works on a dynamic table: an ordered list of column names plus
//! row-major values. Builders declare only the columns they require and
//! tolerate absence through `Option`-returning accessors; no table access
//! panics on a missing column.

use std::collections::HashSet;
use std::fmt;

/// A single dynamically-typed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or unresolvable value (empty CSV cell, failed lookup)
    Null,
    /// Integer value (surrogate keys, date keys)
    Int(i64),
    /// Floating-point value (derived measures)
    Float(f64),
    /// Text value (everything read from a raw extract)
    Str(String),
}

impl Value {
    /// True for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for `Null` or a blank/whitespace-only string
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Borrow the value as a string slice, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the value as an integer (strings are parsed)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Interpret the value as a float (integers widen, strings are parsed)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) => s.trim().parse().ok(),
            Value::Null => None,
        }
    }

    /// Canonical string form used for key matching across tables.
    /// `Null` never matches anything.
    pub fn key_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string().trim().to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// An immutable-after-build tabular snapshot: named columns, row-major values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with no columns and no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given column names
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell access by row index and column name; `None` if either is absent
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// Cell access by row and column index
    pub fn value_at(&self, row: usize, col: usize) -> &Value {
        &self.rows[row][col]
    }

    /// Iterate over rows as value slices
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Append a row. Short rows are padded with `Null`, long rows truncated,
    /// so a ragged source line cannot corrupt the column layout.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    /// Add a column, or replace it if the name already exists (last-wins).
    /// Like `push_row`, a short value vector is padded with `Null` and a
    /// long one truncated to the row count.
    pub fn set_column(&mut self, name: &str, mut values: Vec<Value>) {
        values.resize(self.rows.len(), Value::Null);

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// Add or replace a column holding the same value on every row
    pub fn fill_column(&mut self, name: &str, value: Value) {
        let values = vec![value; self.rows.len()];
        self.set_column(name, values);
    }

    /// Rename a column in place; no-op when the source name is absent
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(idx) = self.column_index(from) {
            self.columns[idx] = to.to_string();
        }
    }

    /// Transform every value of a column in place; no-op when absent
    pub fn map_column<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&Value) -> Value,
    {
        if let Some(idx) = self.column_index(name) {
            for row in &mut self.rows {
                row[idx] = f(&row[idx]);
            }
        }
    }

    /// Project onto the requested columns, silently skipping absent ones.
    /// This is the "present-columns-only" output restriction every builder
    /// applies before persisting.
    pub fn select(&self, wanted: &[&str]) -> Table {
        let indices: Vec<usize> = wanted
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();

        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Table { columns, rows }
    }

    /// Concatenate another table below this one, aligning columns by name.
    /// Columns present on only one side are `Null`-filled on the other.
    pub fn append(&mut self, other: Table) {
        if self.columns.is_empty() {
            *self = other;
            return;
        }

        for column in &other.columns {
            if !self.has_column(column) {
                self.columns.push(column.clone());
                for row in &mut self.rows {
                    row.push(Value::Null);
                }
            }
        }

        let mapping: Vec<usize> = other
            .columns
            .iter()
            .map(|c| self.column_index(c).unwrap_or(usize::MAX))
            .collect();

        for row in other.rows {
            let mut new_row = vec![Value::Null; self.columns.len()];
            for (src_idx, value) in row.into_iter().enumerate() {
                let dst_idx = mapping[src_idx];
                if dst_idx != usize::MAX {
                    new_row[dst_idx] = value;
                }
            }
            self.rows.push(new_row);
        }
    }

    /// Drop later-encountered duplicate rows matching on the given key
    /// columns (keep-first). Returns false without modifying the table when
    /// any key column is absent.
    pub fn dedup_by(&mut self, key_columns: &[&str]) -> bool {
        let indices: Vec<usize> = match key_columns
            .iter()
            .map(|name| self.column_index(name))
            .collect()
        {
            Some(indices) => indices,
            None => return false,
        };

        let mut seen: HashSet<Vec<Option<String>>> = HashSet::new();
        self.rows.retain(|row| {
            let key: Vec<Option<String>> = indices.iter().map(|&i| row[i].key_string()).collect();
            seen.insert(key)
        });
        true
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
