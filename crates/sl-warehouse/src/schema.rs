//! Logical type inference and DDL generation
//!
//! Staging files are untyped CSV, so the loader infers a logical type per
//! column by scanning its non-null values, then renders one `CREATE TABLE`
//! statement per warehouse table into `schema.sql`. Inference is
//! conservative: a single value that fails a type check demotes the whole
//! column, and a column with no values at all lands on text.

use chrono::NaiveDate;
use sl_core::{Table, Value};

/// Inferred column type, mapped to both a SQL type and an Arrow type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalType {
    Integer,
    Decimal,
    Date,
    Text,
}

impl LogicalType {
    /// SQL rendering used in the generated DDL
    pub fn sql_type(&self) -> &'static str {
        match self {
            LogicalType::Integer => "INT",
            LogicalType::Decimal => "DECIMAL(10,2)",
            LogicalType::Date => "DATE",
            LogicalType::Text => "VARCHAR(255)",
        }
    }
}

/// Primary-key column per warehouse table; tables not listed here get no
/// key annotation
const PRIMARY_KEYS: &[(&str, &str)] = &[
    ("DimDate", "sk_date"),
    ("DimClient", "sk_client"),
    ("DimEmployee", "sk_employee"),
    ("FactSales", "fact_id"),
];

pub fn primary_key_for(table_name: &str) -> Option<&'static str> {
    PRIMARY_KEYS
        .iter()
        .find(|(name, _)| *name == table_name)
        .map(|(_, key)| *key)
}

/// Infer the logical type of one column by scanning its non-null values
pub fn infer_column_type(table: &Table, column: usize) -> LogicalType {
    let mut saw_value = false;
    let mut all_int = true;
    let mut all_numeric = true;
    let mut all_date = true;

    for row in table.rows() {
        match &row[column] {
            Value::Null => continue,
            Value::Int(_) => {
                saw_value = true;
                all_date = false;
            }
            Value::Float(_) => {
                saw_value = true;
                all_int = false;
                all_date = false;
            }
            Value::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    continue;
                }
                saw_value = true;
                if trimmed.parse::<i64>().is_err() {
                    all_int = false;
                }
                if trimmed.parse::<f64>().is_err() {
                    all_numeric = false;
                }
                if NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err() {
                    all_date = false;
                }
            }
        }
        if !all_int && !all_numeric && !all_date {
            break;
        }
    }

    if !saw_value {
        return LogicalType::Text;
    }
    if all_int {
        LogicalType::Integer
    } else if all_numeric {
        LogicalType::Decimal
    } else if all_date {
        LogicalType::Date
    } else {
        LogicalType::Text
    }
}

/// Infer a logical type for every column of a table
pub fn infer_types(table: &Table) -> Vec<LogicalType> {
    (0..table.column_count())
        .map(|col| infer_column_type(table, col))
        .collect()
}

/// Render the `CREATE TABLE` statement for one warehouse table
pub fn ddl_statement(table_name: &str, table: &Table, types: &[LogicalType]) -> String {
    let primary_key = primary_key_for(table_name);
    let lines: Vec<String> = table
        .columns()
        .iter()
        .zip(types)
        .map(|(column, logical_type)| {
            let mut line = format!("    {} {}", column, logical_type.sql_type());
            if primary_key == Some(column.as_str()) {
                line.push_str(" PRIMARY KEY");
            }
            line
        })
        .collect();

    format!("CREATE TABLE {} (\n{}\n);\n", table_name, lines.join(",\n"))
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
