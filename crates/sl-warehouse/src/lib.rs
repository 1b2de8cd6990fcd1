//! Warehouse layer: staging-to-warehouse load, schema generation, and
//! validation of the final star-schema artifacts.

pub mod error;
pub mod load;
pub mod parquet_util;
pub mod schema;
pub mod validate;

pub use error::{WarehouseError, WarehouseResult};
pub use load::{load_warehouse, LoadReport, LoadedTable, STAGING_TO_WAREHOUSE};
pub use parquet_util::{read_parquet, write_parquet};
pub use schema::{ddl_statement, infer_types, LogicalType};
pub use validate::{
    validate_warehouse, TableStatus, TableValidation, ValidationReport, WAREHOUSE_TABLES,
};
