//! Warehouse-layer error types

use sl_core::CoreError;
use thiserror::Error;

/// Errors raised while loading or validating the warehouse
#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("[W001] Failed to create warehouse directory {path}: {source}")]
    WarehouseDir {
        path: String,
        source: std::io::Error,
    },

    #[error("[W002] Failed to read staging file {path}: {source}")]
    StagingRead { path: String, source: CoreError },

    #[error("[W003] Failed to write warehouse CSV {path}: {source}")]
    CsvWrite { path: String, source: CoreError },

    #[error("[W004] Failed to open parquet file {path}: {source}")]
    ParquetFile {
        path: String,
        source: std::io::Error,
    },

    #[error("[W005] Parquet error on {path}: {source}")]
    Parquet {
        path: String,
        source: parquet::errors::ParquetError,
    },

    #[error("[W006] Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("[W007] Failed to write schema file {path}: {source}")]
    SchemaWrite {
        path: String,
        source: std::io::Error,
    },
}

pub type WarehouseResult<T> = Result<T, WarehouseError>;
