//! sl-transform - Transformation engine for Starlift
//!
//! Reconciles raw order extracts from multiple source connectors into a
//! conformed star schema: three dimensions (date, client, employee) and one
//! sales fact, all produced as in-memory tables and persisted to the
//! staging directory by the orchestrator.

pub mod dates;
pub mod dim_client;
pub mod dim_date;
pub mod dim_employee;
pub mod error;
pub mod fact_sales;
pub mod join;
pub mod outcome;
pub mod pipeline;
pub mod source;
pub mod territory;

pub use dates::{date_key, parse_date, SENTINEL_DATE_KEY};
pub use dim_client::build_dim_client;
pub use dim_date::build_dim_date;
pub use dim_employee::build_dim_employee;
pub use error::{TransformError, TransformResult};
pub use fact_sales::build_fact_sales;
pub use outcome::{BuildOutcome, EmptyReason};
pub use pipeline::{run_transformation, TransformOutputs};
pub use source::{load_source_table, normalize_column_name};
pub use territory::{aggregate_territories, TerritoryInfo};
