//! Builder outcome type
//!
//! Every dimension and fact builder returns a tagged outcome instead of a
//! bare table, so that "legitimately zero rows" and "degraded to empty
//! because an input was missing" stay distinguishable at the orchestration
//! layer. Downstream persistence degrades `Empty` to an empty table.

use sl_core::Table;
use std::fmt;

/// Why a builder produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// A required source table had no rows
    SourceEmpty(&'static str),
    /// A required join or measure column was entirely absent
    MissingColumn(&'static str),
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::SourceEmpty(table) => {
                write!(f, "source table '{}' is empty", table)
            }
            EmptyReason::MissingColumn(column) => {
                write!(f, "required column '{}' is absent", column)
            }
        }
    }
}

/// Result of a dimension or fact build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// The builder produced a table
    Built(Table),
    /// The builder degraded to empty output
    Empty(EmptyReason),
}

impl BuildOutcome {
    /// Borrow the built table, if any
    pub fn table(&self) -> Option<&Table> {
        match self {
            BuildOutcome::Built(table) => Some(table),
            BuildOutcome::Empty(_) => None,
        }
    }

    /// Degrade to a table for persistence (`Empty` becomes a zero-column,
    /// zero-row table)
    pub fn into_table(self) -> Table {
        match self {
            BuildOutcome::Built(table) => table,
            BuildOutcome::Empty(_) => Table::new(),
        }
    }

    /// The degradation reason, if any
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            BuildOutcome::Built(_) => None,
            BuildOutcome::Empty(reason) => Some(*reason),
        }
    }

    /// True when the builder produced a table
    pub fn is_built(&self) -> bool {
        matches!(self, BuildOutcome::Built(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_table_degrades_empty() {
        let outcome = BuildOutcome::Empty(EmptyReason::SourceEmpty("orders"));
        assert!(!outcome.is_built());
        let table = outcome.into_table();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(
            EmptyReason::SourceEmpty("orders").to_string(),
            "source table 'orders' is empty"
        );
        assert_eq!(
            EmptyReason::MissingColumn("unitprice").to_string(),
            "required column 'unitprice' is absent"
        );
    }
}
