//! Error types for sl-transform

use sl_core::CoreError;
use thiserror::Error;

/// Transformation error type. Per-row and per-table degradations are not
/// errors (they surface as `BuildOutcome::Empty` or logged warnings); only
/// conditions that abort the whole run live here.
#[derive(Error, Debug)]
pub enum TransformError {
    /// T001: Failed to persist a staging output
    #[error("[T001] Failed to write staging file '{path}': {source}")]
    StagingWrite { path: String, source: CoreError },

    /// T002: Failed to create the staging directory
    #[error("[T002] Failed to create staging directory '{path}': {source}")]
    StagingDir {
        path: String,
        source: std::io::Error,
    },

    /// T003: Core error
    #[error("[T003] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for TransformError
pub type TransformResult<T> = Result<T, TransformError>;
